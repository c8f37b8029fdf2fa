use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_FLOCK_NAME_LEN: usize = 50;
pub const DEFAULT_FLOCK_NAME: &str = "My Flock";

/// One user's cohort of chicks, tracked as a single scheduling unit.
///
/// Invariant: `status == Preparing` ⇔ `start_date` is `None` ⇔
/// `current_week == 0`. The start transition flips all three atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flock {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub status: FlockStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub current_week: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlockStatus {
    Preparing,
    Active,
    Graduated,
}

impl FlockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparing => "preparing",
            Self::Active => "active",
            Self::Graduated => "graduated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "preparing" => Some(Self::Preparing),
            "active" => Some(Self::Active),
            "graduated" => Some(Self::Graduated),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFlockInput {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFlockInput {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub current_week: Option<i64>,
    pub status: Option<FlockStatus>,
}
