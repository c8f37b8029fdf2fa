//! Completion ledger endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brooder_core::calendar;
use brooder_core::models::{CompletionStats, CompletionWithTask, TaskCompletion};

use super::{load_owned_flock, ApiError, AppState};
use crate::auth::CurrentUser;

#[derive(Serialize)]
pub struct HistoryResponse {
    pub completions: Vec<CompletionWithTask>,
    pub stats: CompletionStats,
}

/// Full completion history for a flock (newest first) plus per-category
/// totals.
pub async fn history(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, ApiError> {
    load_owned_flock(&state.db, &user, flock_id)?;
    Ok(Json(HistoryResponse {
        completions: state.db.completions_for_flock(flock_id)?,
        stats: state.db.completion_stats(flock_id)?,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerAction {
    Complete,
    Undo,
}

/// POST body. Without `day_date` the ledger day is today in the reference
/// timezone; with an explicit instant it is that instant's UTC calendar
/// day.
#[derive(Deserialize)]
pub struct RecordBody {
    pub task_id: Uuid,
    pub day_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    #[serde(default = "default_action")]
    pub action: LedgerAction,
}

fn default_action() -> LedgerAction {
    LedgerAction::Complete
}

pub async fn record(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
    Json(body): Json<RecordBody>,
) -> Result<(StatusCode, Json<TaskCompletion>), ApiError> {
    load_owned_flock(&state.db, &user, flock_id)?;

    if state.db.get_task(body.task_id)?.is_none() {
        return Err(ApiError::not_found("task"));
    }

    let day = body
        .day_date
        .map(calendar::utc_day)
        .unwrap_or_else(calendar::today_in_reference);

    match body.action {
        LedgerAction::Complete => {
            let completion =
                state
                    .db
                    .complete_task(flock_id, body.task_id, day, body.notes.as_deref())?;
            Ok((StatusCode::CREATED, Json(completion)))
        }
        LedgerAction::Undo => {
            let completion = state.db.undo_completion(flock_id, body.task_id, day)?;
            Ok((StatusCode::OK, Json(completion)))
        }
    }
}
