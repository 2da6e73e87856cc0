#![forbid(unsafe_code)]

use thiserror::Error;

/// Failures surfaced by the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to parse fixture JSON: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error("text not found in rendered frame: {0:?}")]
    TextNotFound(String),
    #[error("placeholder mismatch: expected {expected:?}, found {actual:?}")]
    PlaceholderMismatch { expected: String, actual: String },
}
