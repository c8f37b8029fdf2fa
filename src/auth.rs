//! Request identity.
//!
//! Every `/api` request carries the caller's opaque user id in the
//! `x-user-id` header. The server never mints or verifies these ids; it
//! only scopes data by them. A missing header is a 401 before any handler
//! logic runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, extracted from the `x-user-id` header.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty());

        match user_id {
            Some(id) => Ok(CurrentUser(id.to_string())),
            None => Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "unauthorized" })),
            )),
        }
    }
}
