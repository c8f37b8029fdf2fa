//! Task resolution: which week a flock is in and which of that week's
//! tasks are done today.

use chrono::{DateTime, Utc};

use crate::calendar;
use crate::db::Database;
use crate::temperature;
use crate::error::Result;
use crate::models::{Flock, TaskWithStatus, WeekSchedule};

/// Resolve the week view for a flock.
///
/// `requested_week` overrides the flock's current week for browsing ahead
/// or back. The completion overlay is always today's (reference-timezone)
/// ledger state for the flock, regardless of which week is being viewed.
/// A task from a non-current week therefore always shows as not completed.
pub fn resolve_week(
    db: &Database,
    flock: &Flock,
    requested_week: Option<i64>,
    now: DateTime<Utc>,
) -> Result<WeekSchedule> {
    let (current_week, current_day) = match flock.start_date {
        Some(start) => {
            let day = calendar::elapsed_days(start, now);
            (calendar::week_of(day), day)
        }
        // Not started: day is meaningless, week is the cached field
        // (0 while preparing).
        None => (flock.current_week, 0),
    };

    let week = requested_week.unwrap_or(current_week);
    let tasks = db.tasks_for_week(week)?;

    let today = calendar::reference_day(now);
    let completed: std::collections::HashSet<_> = db
        .completions_for_day(flock.id, today)?
        .into_iter()
        .map(|c| c.completion.task_id)
        .collect();

    let tasks = tasks
        .into_iter()
        .map(|task| TaskWithStatus {
            is_completed: completed.contains(&task.id),
            task,
        })
        .collect();

    Ok(WeekSchedule {
        tasks,
        current_week,
        current_day,
        flock_status: flock.status,
        recommended_temp_f: temperature::recommended_for_week(week),
    })
}
