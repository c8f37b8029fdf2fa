use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors produced by database and lifecycle operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The named resource does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A lifecycle state machine rejected the requested transition.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// Caller-supplied input failed validation.
    #[error("{0}")]
    Validation(String),

    /// A stored value could not be decoded (corrupt enum text, bad
    /// timestamp). Indicates a bug or manual database edits.
    #[error("invalid stored value: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
