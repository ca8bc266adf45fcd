//! Unified error types for imagedash.
//!
//! Parsing helpers (image references, purls) deliberately never appear here:
//! they return best-effort structs or `Option` so display code can treat
//! unparseable input as a normal, renderable state. Errors are reserved for
//! the API boundary, the demo dump, IO and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for imagedash operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TrackerError {
    /// Errors talking to the backend API
    #[error("API request failed: {context}")]
    Api {
        context: String,
        #[source]
        source: ApiErrorKind,
    },

    /// Errors loading or reading the demo dump
    #[error("Demo dump error: {context}")]
    Dump {
        context: String,
        #[source]
        source: DumpErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific API error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiErrorKind {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Live API support is not compiled in (enable the `live` feature)")]
    Unavailable,
}

/// Specific demo dump error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DumpErrorKind {
    #[error("Dump file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid dump JSON: {0}")]
    InvalidJson(String),

    #[error("Resource {kind:?} for {reference:?} has an unexpected shape: {message}")]
    InvalidResource {
        reference: String,
        kind: String,
        message: String,
    },
}

/// Convenient Result type for imagedash operations
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Create an API error with context
    pub fn api(context: impl Into<String>, source: ApiErrorKind) -> Self {
        Self::Api {
            context: context.into(),
            source,
        }
    }

    /// Create a demo dump error with context
    pub fn dump(context: impl Into<String>, source: DumpErrorKind) -> Self {
        Self::Dump {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::dump(
            "JSON deserialization",
            DumpErrorKind::InvalidJson(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::api(
            "listing images",
            ApiErrorKind::Status {
                status: 500,
                body: "boom".to_string(),
            },
        );
        let display = err.to_string();
        assert!(display.contains("listing images"), "got: {display}");

        let err = TrackerError::dump(
            "loading dump",
            DumpErrorKind::NotFound(PathBuf::from("/tmp/dump.json")),
        );
        assert!(err.to_string().contains("loading dump"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = TrackerError::io("/path/to/dump.json", io_err);
        assert!(err.to_string().contains("/path/to/dump.json"));
    }
}
