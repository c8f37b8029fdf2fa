use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::flock::FlockStatus;

/// A catalog entry from the fixed curriculum. Immutable at runtime; the
/// catalog is bulk-loaded by the seeder and only ever read afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub detailed_content: String,
    pub week_number: i64,
    /// 1-based absolute day since flock start. `None` for DAILY tasks
    /// (every day of the week) and for "any day this week" entries.
    pub day_number: Option<i64>,
    pub frequency: TaskFrequency,
    pub category: TaskCategory,
    pub sort_order: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskFrequency {
    Once,
    Daily,
    Weekly,
}

impl TaskFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "once" => Some(Self::Once),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }
}

/// Display grouping only; carries no scheduling semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Preparation,
    BrooderCare,
    FeedingWater,
    HealthCheck,
    Environment,
    Milestone,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparation => "preparation",
            Self::BrooderCare => "brooder_care",
            Self::FeedingWater => "feeding_water",
            Self::HealthCheck => "health_check",
            Self::Environment => "environment",
            Self::Milestone => "milestone",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "preparation" => Some(Self::Preparation),
            "brooder_care" => Some(Self::BrooderCare),
            "feeding_water" => Some(Self::FeedingWater),
            "health_check" => Some(Self::HealthCheck),
            "environment" => Some(Self::Environment),
            "milestone" => Some(Self::Milestone),
            _ => None,
        }
    }
}

/// A catalog entry annotated with today's completion state for one flock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskWithStatus {
    #[serde(flatten)]
    pub task: Task,
    pub is_completed: bool,
}

/// Response shape for the week view: the requested week's tasks overlaid
/// with today's completions, plus where the flock currently stands and
/// the viewed week's brooder temperature target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub tasks: Vec<TaskWithStatus>,
    pub current_week: i64,
    pub current_day: i64,
    pub flock_status: FlockStatus,
    pub recommended_temp_f: i64,
}
