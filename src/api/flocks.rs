//! Flock endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use brooder_core::models::{CompletionWithTask, CreateFlockInput, Flock, UpdateFlockInput};

use super::{load_owned_flock, ApiError, AppState};
use crate::auth::CurrentUser;

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<Flock>>, ApiError> {
    Ok(Json(state.db.list_flocks_for_user(&user.0)?))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<CreateFlockInput>,
) -> Result<(StatusCode, Json<Flock>), ApiError> {
    let flock = state.db.create_flock(&user.0, input)?;
    Ok((StatusCode::CREATED, Json(flock)))
}

/// Detail view: the flock with its completion history attached.
#[derive(Serialize)]
pub struct FlockDetail {
    #[serde(flatten)]
    pub flock: Flock,
    pub task_completions: Vec<CompletionWithTask>,
}

pub async fn show(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
) -> Result<Json<FlockDetail>, ApiError> {
    let flock = load_owned_flock(&state.db, &user, flock_id)?;
    let task_completions = state.db.completions_for_flock(flock_id)?;
    Ok(Json(FlockDetail {
        flock,
        task_completions,
    }))
}

/// PATCH body: field updates plus an optional `action`. The only action
/// is `"start"`, which runs the PREPARING → ACTIVE transition with the
/// current time as the start date.
#[derive(Deserialize)]
pub struct PatchFlockBody {
    pub action: Option<String>,
    #[serde(flatten)]
    pub update: UpdateFlockInput,
}

pub async fn patch(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
    Json(body): Json<PatchFlockBody>,
) -> Result<Json<Flock>, ApiError> {
    load_owned_flock(&state.db, &user, flock_id)?;

    let flock = match body.action.as_deref() {
        Some("start") => state.db.start_flock(flock_id, Utc::now())?,
        Some(other) => return Err(ApiError::bad_request(format!("unknown action {other:?}"))),
        None => state.db.update_flock(flock_id, body.update)?,
    };
    Ok(Json(flock))
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    load_owned_flock(&state.db, &user, flock_id)?;

    // Collect blob URLs before the rows cascade away.
    let urls = state.db.photo_urls_for_flock(flock_id)?;
    if !state.db.delete_flock(flock_id)? {
        return Err(ApiError::not_found("flock"));
    }
    state.storage.delete_blobs(&urls).await;

    Ok(Json(json!({ "success": true })))
}
