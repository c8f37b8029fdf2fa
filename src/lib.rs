//! HTTP server for Brooder.
//!
//! The domain logic lives in `brooder-core`; this crate adds the axum
//! transport: routing, header-based identity, photo blob storage, and the
//! mapping from core errors to HTTP status codes.

pub mod api;
pub mod auth;
pub mod storage;
