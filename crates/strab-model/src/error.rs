//! Error types for the host-facing parsing surfaces.
//!
//! Resolving a shorthand never fails; these errors only come from turning
//! host-supplied text (records, options) into model types.

use thiserror::Error;

/// Errors from parsing signal records or matcher options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrabError {
    /// Input was not valid JSON for the requested type.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An option value failed validation.
    #[error("invalid {field}: {message}")]
    InvalidOption {
        field: &'static str,
        message: String,
    },
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, StrabError>;
