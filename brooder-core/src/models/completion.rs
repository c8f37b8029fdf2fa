use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::task::Task;

/// One row of the completion ledger. The triple (flock_id, task_id,
/// day_date) is unique; re-completion after an undo flips the same row
/// back rather than creating a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCompletion {
    pub id: Uuid,
    pub flock_id: Uuid,
    pub task_id: Uuid,
    pub day_date: NaiveDate,
    pub completed_at: DateTime<Utc>,
    pub undone_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl TaskCompletion {
    /// A task counts as completed iff the row exists and has not been
    /// undone.
    pub fn is_completed(&self) -> bool {
        self.undone_at.is_none()
    }
}

/// A ledger row joined with its task metadata, for history views and
/// category aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionWithTask {
    #[serde(flatten)]
    pub completion: TaskCompletion,
    pub task: Task,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionStats {
    pub total_completed: i64,
    pub by_category: BTreeMap<String, i64>,
}
