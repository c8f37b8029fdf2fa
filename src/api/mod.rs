//! HTTP API.
//!
//! All routes live under `/api` and require the `x-user-id` header (see
//! [`crate::auth`]). Responses are JSON; errors are `{"error": "..."}`
//! with the status carrying the category.

mod chicks;
mod completions;
mod flocks;
mod notes;
mod photos;
mod tasks;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use brooder_core::models::{Chick, Flock};
use brooder_core::{CoreError, Database};

use crate::auth::CurrentUser;
use crate::storage::{BlobStore, StorageError, MAX_PHOTO_BYTES};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub storage: Arc<dyn BlobStore>,
}

pub fn create_router(db: Database, storage: Arc<dyn BlobStore>) -> Router {
    let state = AppState { db, storage };

    Router::new()
        .route("/api/flocks", get(flocks::list).post(flocks::create))
        .route(
            "/api/flocks/{flock_id}",
            get(flocks::show).patch(flocks::patch).delete(flocks::delete),
        )
        .route("/api/flocks/{flock_id}/tasks", get(tasks::week_view))
        .route(
            "/api/flocks/{flock_id}/completions",
            get(completions::history).post(completions::record),
        )
        .route(
            "/api/flocks/{flock_id}/chicks",
            get(chicks::list).post(chicks::create),
        )
        .route(
            "/api/chicks/{chick_id}",
            get(chicks::show).patch(chicks::patch).delete(chicks::delete),
        )
        .route(
            "/api/chicks/{chick_id}/photos",
            get(photos::list).post(photos::upload),
        )
        .route("/api/photos/{photo_id}", axum::routing::delete(photos::delete))
        .route(
            "/api/chicks/{chick_id}/notes",
            get(notes::list).post(notes::create),
        )
        .route(
            "/api/notes/{note_id}",
            axum::routing::patch(notes::update).delete(notes::delete),
        )
        .layer(DefaultBodyLimit::max(MAX_PHOTO_BYTES + 64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// An HTTP-facing error: status plus a one-line message.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(what: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{what} not found"),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: "forbidden".into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match &err {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::InvalidTransition(_) => StatusCode::CONFLICT,
            CoreError::Corrupt(_) | CoreError::Sqlite(_) => {
                tracing::error!("internal error: {}", err);
                return Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "internal server error".into(),
                };
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::InvalidType(_) | StorageError::TooLarge => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            StorageError::Io(_) => {
                tracing::error!("storage error: {}", err);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "internal server error".into(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Load a flock and enforce that the caller owns it. A missing flock is
/// 404; an existing flock owned by someone else is 403 (existence is
/// revealed only after the ownership check passes 404).
pub(crate) fn load_owned_flock(
    db: &Database,
    user: &CurrentUser,
    flock_id: Uuid,
) -> Result<Flock, ApiError> {
    let flock = db.get_flock(flock_id)?.ok_or(ApiError::not_found("flock"))?;
    if flock.user_id != user.0 {
        return Err(ApiError::forbidden());
    }
    Ok(flock)
}

/// Load a chick via its flock's owner. Same 404/403 split as
/// [`load_owned_flock`].
pub(crate) fn load_owned_chick(
    db: &Database,
    user: &CurrentUser,
    chick_id: Uuid,
) -> Result<Chick, ApiError> {
    let chick = db.get_chick(chick_id)?.ok_or(ApiError::not_found("chick"))?;
    load_owned_flock(db, user, chick.flock_id)?;
    Ok(chick)
}
