//! The week view: a flock's tasks for one curriculum week, annotated with
//! today's completion state.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use brooder_core::models::WeekSchedule;
use brooder_core::schedule;

use super::{load_owned_flock, ApiError, AppState};
use crate::auth::CurrentUser;

#[derive(Deserialize)]
pub struct WeekQuery {
    /// Week to view; defaults to the flock's current week.
    pub week: Option<i64>,
}

pub async fn week_view(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekSchedule>, ApiError> {
    let flock = load_owned_flock(&state.db, &user, flock_id)?;
    let view = schedule::resolve_week(&state.db, &flock, query.week, Utc::now())?;
    Ok(Json(view))
}
