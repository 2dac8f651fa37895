//! Error types for schema and documentation loading.

use thiserror::Error;

/// Errors that can occur while loading the API description.
///
/// Every variant is fatal for a generation run.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The API description file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The API description is not valid JSON or does not have the expected shape.
    #[error("malformed API description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while loading one documentation file.
///
/// Documentation is best-effort: [`crate::DocDirectory`] logs these and
/// treats the bundle as absent.
#[derive(Debug, Error)]
pub enum DocError {
    /// I/O error reading the documentation file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML syntax error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Text or attribute that is not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Well-formed XML that is not a class documentation file.
    #[error("invalid documentation structure: {0}")]
    InvalidStructure(String),
}
