//! Core library for Brooder.
//!
//! This crate provides the domain models, calendar math, and database
//! operations for Brooder, independent of any transport layer (HTTP, CLI,
//! etc.).
//!
//! # Usage
//!
//! ```no_run
//! use brooder_core::db::Database;
//!
//! let db = Database::open_default()?;
//! db.migrate()?;
//!
//! let flocks = db.list_flocks_for_user("user-1")?;
//! # Ok::<(), brooder_core::CoreError>(())
//! ```

pub mod calendar;
pub mod db;
pub mod error;
pub mod models;
pub mod schedule;
pub mod temperature;

// Re-export commonly used types at crate root
pub use db::Database;
pub use error::{CoreError, Result};
