//! Error handling for the crate boundary.
//!
//! Only the JSON decode seam is fallible. The calculators themselves
//! never error: failure degrades to a sentinel or a zero default so a
//! total can always be rendered.

/// Boundary error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
