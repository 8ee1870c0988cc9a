//! Error types for globe-paths

use std::fmt;

/// Result type for globe-paths operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in globe-paths operations
///
/// The coordinate transforms themselves never fail. Only great-circle
/// generation and configuration loading produce errors.
#[derive(Debug)]
pub enum Error {
    /// Great-circle generator failed to produce a path
    Generation(String),

    /// Great-circle generator returned a geometry without coordinates
    EmptyGeometry,

    /// Invalid arc configuration
    Config(String),

    /// JSON (de)serialization error
    Json(serde_json::Error),
}

impl Error {
    /// Returns true for the failures a caller should render as an empty arc
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Error::Generation(_) | Error::EmptyGeometry)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Generation(msg) => write!(f, "Great-circle generation failed: {}", msg),
            Error::EmptyGeometry => write!(f, "Great-circle generator returned empty geometry"),
            Error::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}
