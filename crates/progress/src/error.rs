//! Error types for the progress layer.

use bootcamp_core::BootcampId;

/// Result type for progress operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors that can occur while enrolling, progressing or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// No bootcamp with this id
    #[error("Bootcamp not found: {0}")]
    BootcampNotFound(BootcampId),

    /// A bootcamp with this id is already registered
    #[error("Bootcamp already registered: {0}")]
    DuplicateBootcamp(BootcampId),

    /// No developer with this name
    #[error("Developer not found: {0}")]
    DeveloperNotFound(String),

    /// A developer with this name is already registered
    #[error("Developer already registered: {0}")]
    DuplicateDeveloper(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}
