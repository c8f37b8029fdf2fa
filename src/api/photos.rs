//! Chick photo gallery endpoints. Uploads are multipart; blobs go through
//! the [`crate::storage::BlobStore`] and only URLs reach the database.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use brooder_core::calendar;
use brooder_core::models::{ChickPhoto, CreateChickPhotoInput};

use super::{load_owned_chick, load_owned_flock, ApiError, AppState};
use crate::auth::CurrentUser;

/// Per-chick gallery cap. Keeps one runaway uploader from filling the
/// disk.
const MAX_PHOTOS_PER_CHICK: i64 = 100;

pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(chick_id): Path<Uuid>,
) -> Result<Json<Vec<ChickPhoto>>, ApiError> {
    load_owned_chick(&state.db, &user, chick_id)?;
    Ok(Json(state.db.photos_for_chick(chick_id)?))
}

pub async fn upload(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(chick_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ChickPhoto>), ApiError> {
    let chick = load_owned_chick(&state.db, &user, chick_id)?;

    if state.db.count_photos_for_chick(chick_id)? >= MAX_PHOTOS_PER_CHICK {
        return Err(ApiError::bad_request(format!(
            "photo limit of {MAX_PHOTOS_PER_CHICK} reached for this chick"
        )));
    }

    let mut upload: Option<(Vec<u8>, String)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let content_type = field
                .content_type()
                .ok_or_else(|| ApiError::bad_request("file field needs a content type"))?
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;
            upload = Some((bytes.to_vec(), content_type));
        }
    }
    let (bytes, content_type) =
        upload.ok_or_else(|| ApiError::bad_request("missing file field"))?;

    let stored = state
        .storage
        .store_photo(chick_id, &bytes, &content_type)
        .await?;

    let now = Utc::now();
    // Stamp the photo with the flock's week at upload time.
    let week_number = load_owned_flock(&state.db, &user, chick.flock_id)?
        .start_date
        .map(|start| calendar::week_of(calendar::elapsed_days(start, now)));

    let photo = state.db.create_chick_photo(
        chick_id,
        CreateChickPhotoInput {
            image_url: stored.image_url,
            thumbnail_url: stored.thumbnail_url,
            taken_at: Some(now),
            week_number,
        },
    )?;

    Ok((StatusCode::CREATED, Json(photo)))
}

pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(photo_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let photo = state
        .db
        .get_chick_photo(photo_id)?
        .ok_or(ApiError::not_found("photo"))?;
    load_owned_chick(&state.db, &user, photo.chick_id)?;

    if !state.db.delete_chick_photo(photo_id)? {
        return Err(ApiError::not_found("photo"));
    }
    state
        .storage
        .delete_blobs(&[photo.image_url, photo.thumbnail_url])
        .await;

    Ok(Json(json!({ "success": true })))
}
