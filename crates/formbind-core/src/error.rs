//! Core error types for formbind.
//!
//! Validation failures are not errors: they are data stored on a form
//! control and surfaced as display text. [`FormbindError`] covers the
//! remaining failure modes, which all happen outside the edit/blur event
//! path: loading configuration, checking it, and addressing fields by name.

use thiserror::Error;

/// The primary error type for formbind.
#[derive(Error, Debug)]
pub enum FormbindError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing, malformed, or cannot be parsed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The configuration parsed but describes something contradictory,
    /// such as a field whose minimum length exceeds its maximum length.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Forms ────────────────────────────────────────────────────────

    /// A field name was used that the form does not define.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for FormbindError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormbindError>`.
pub type FormbindResult<T> = Result<T, FormbindError>;
