//! Error types for declaration generation

use gdswift_schema::SchemaError;
use thiserror::Error;

/// Result type alias for generation operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for generation operations
///
/// Only conditions that make the whole run unusable are errors. Missing
/// documentation, duplicate enum values and unknown build configurations are
/// handled in place and logged.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The API description could not be loaded
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Invalid run configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing generated output failed
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
