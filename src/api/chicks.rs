//! Chick roster and profile endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use brooder_core::models::{
    Chick, ChickProfile, ChickSummary, CreateChickInput, UpdateChickInput,
};

use super::{load_owned_chick, load_owned_flock, ApiError, AppState};
use crate::auth::CurrentUser;

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
) -> Result<Json<Vec<ChickSummary>>, ApiError> {
    load_owned_flock(&state.db, &user, flock_id)?;
    Ok(Json(state.db.chicks_for_flock(flock_id)?))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(flock_id): Path<Uuid>,
    Json(input): Json<CreateChickInput>,
) -> Result<(StatusCode, Json<Chick>), ApiError> {
    load_owned_flock(&state.db, &user, flock_id)?;
    let chick = state.db.create_chick(flock_id, input)?;
    Ok((StatusCode::CREATED, Json(chick)))
}

pub async fn show(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(chick_id): Path<Uuid>,
) -> Result<Json<ChickProfile>, ApiError> {
    load_owned_chick(&state.db, &user, chick_id)?;
    state
        .db
        .get_chick_profile(chick_id)?
        .map(Json)
        .ok_or(ApiError::not_found("chick"))
}

pub async fn patch(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(chick_id): Path<Uuid>,
    Json(input): Json<UpdateChickInput>,
) -> Result<Json<Chick>, ApiError> {
    load_owned_chick(&state.db, &user, chick_id)?;
    Ok(Json(state.db.update_chick(chick_id, input)?))
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(chick_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    load_owned_chick(&state.db, &user, chick_id)?;

    let urls: Vec<String> = state
        .db
        .photos_for_chick(chick_id)?
        .into_iter()
        .flat_map(|p| [p.image_url, p.thumbnail_url])
        .collect();
    if !state.db.delete_chick(chick_id)? {
        return Err(ApiError::not_found("chick"));
    }
    state.storage.delete_blobs(&urls).await;

    Ok(Json(json!({ "success": true })))
}
