//! Error types for surface loading and extern generation.

use thiserror::Error;

/// Errors that can occur while loading a declaration surface or writing
/// the extern artifact.
#[derive(Debug, Error)]
pub enum ExternError {
    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error in a surface file.
    #[error("JSON error: {0}")]
    Json(String),

    /// Two surface entries share the same id.
    #[error("Duplicate declaration id: {0}")]
    DuplicateId(String),

    /// Reference to an id with no corresponding declaration entry.
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Invalid entry or type structure.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl ExternError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create an unresolved reference error.
    pub fn unresolved(id: impl Into<String>) -> Self {
        Self::UnresolvedReference(id.into())
    }

    /// Create an invalid entry error.
    pub fn invalid_entry(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "entry",
            message: message.into(),
        }
    }
}

/// Result alias for extern generation operations.
pub type ExternResult<T> = Result<T, ExternError>;
