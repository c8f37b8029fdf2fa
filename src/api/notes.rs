//! Chick journal notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use brooder_core::models::{ChickNote, CreateChickNoteInput};

use super::{load_owned_chick, ApiError, AppState};
use crate::auth::CurrentUser;

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(chick_id): Path<Uuid>,
) -> Result<Json<Vec<ChickNote>>, ApiError> {
    load_owned_chick(&state.db, &user, chick_id)?;
    Ok(Json(state.db.notes_for_chick(chick_id)?))
}

pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(chick_id): Path<Uuid>,
    Json(input): Json<CreateChickNoteInput>,
) -> Result<(StatusCode, Json<ChickNote>), ApiError> {
    load_owned_chick(&state.db, &user, chick_id)?;
    let note = state.db.create_chick_note(chick_id, input)?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[derive(Deserialize)]
pub struct UpdateNoteBody {
    pub content: String,
}

pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
    Json(body): Json<UpdateNoteBody>,
) -> Result<Json<ChickNote>, ApiError> {
    let note = state
        .db
        .get_chick_note(note_id)?
        .ok_or(ApiError::not_found("note"))?;
    load_owned_chick(&state.db, &user, note.chick_id)?;
    Ok(Json(state.db.update_chick_note(note_id, &body.content)?))
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(note_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let note = state
        .db
        .get_chick_note(note_id)?
        .ok_or(ApiError::not_found("note"))?;
    load_owned_chick(&state.db, &user, note.chick_id)?;

    if !state.db.delete_chick_note(note_id)? {
        return Err(ApiError::not_found("note"));
    }
    Ok(Json(json!({ "success": true })))
}
