//! Error types for the Hallmark library.

use thiserror::Error;

/// Main error type for Hallmark operations.
///
/// Classification itself has no failure modes; odd inputs resolve to "no
/// inference". Errors only arise at the serialization boundary.
#[derive(Debug, Error)]
pub enum HallmarkError {
    /// JSON serialization/deserialization error.
    #[error("fingerprint JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Hallmark operations.
pub type Result<T> = std::result::Result<T, HallmarkError>;
