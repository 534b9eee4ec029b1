//! Error taxonomy for environment loading.
//!
//! Responsibilities:
//! - Define the four failure kinds surfaced by `EnvLoader::load()`.
//! - Carry the resolved environment key and the structural path on every error.
//! - Preserve underlying causes (JSON syntax errors, transform failures) as
//!   `Error::source()` instead of flattening them into the message.
//!
//! Does NOT handle:
//! - Schema definition problems (see `schema::SchemaError`).
//! - Recovery or aggregation: the first error aborts the load.
//!
//! Invariants:
//! - Every variant has a path; the path of the root is empty.
//! - Messages never embed the raw environment value of a failing key.

use std::fmt;

use thiserror::Error;

/// Boxed cause attached to an `EnvError`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while resolving a schema against an environment.
#[derive(Error, Debug)]
pub enum EnvError {
    /// A required leaf had no value (absent, empty, or whitespace-only).
    #[error("Missing required environment variable: {key}")]
    Missing { key: String, path: Vec<String> },

    /// The value was readable but failed a semantic constraint.
    #[error("Invalid value for {key}: {message}")]
    Validation {
        key: String,
        message: String,
        path: Vec<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// The value (or the schema node) could not be interpreted at all.
    #[error("Parse error for {key}: {message}")]
    Parse {
        key: String,
        message: String,
        path: Vec<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// A post-validation transform reported a failure.
    #[error("Transform failed for {key}: {message}")]
    Transform {
        key: String,
        message: String,
        path: Vec<String>,
        #[source]
        source: Option<BoxError>,
    },
}

/// Classification of an `EnvError` without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Missing,
    Validation,
    Parse,
    Transform,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Missing => "missing",
            ErrorKind::Validation => "validation",
            ErrorKind::Parse => "parse",
            ErrorKind::Transform => "transform",
        };
        f.write_str(name)
    }
}

impl EnvError {
    pub fn missing(key: impl Into<String>, path: &[String]) -> Self {
        EnvError::Missing {
            key: key.into(),
            path: path.to_vec(),
        }
    }

    pub fn validation(key: impl Into<String>, message: impl Into<String>, path: &[String]) -> Self {
        EnvError::Validation {
            key: key.into(),
            message: message.into(),
            path: path.to_vec(),
            source: None,
        }
    }

    pub fn parse(key: impl Into<String>, message: impl Into<String>, path: &[String]) -> Self {
        EnvError::Parse {
            key: key.into(),
            message: message.into(),
            path: path.to_vec(),
            source: None,
        }
    }

    pub fn transform(key: impl Into<String>, message: impl Into<String>, path: &[String]) -> Self {
        EnvError::Transform {
            key: key.into(),
            message: message.into(),
            path: path.to_vec(),
            source: None,
        }
    }

    /// Attach an underlying cause. `Missing` carries no cause and is returned unchanged.
    pub fn with_source(mut self, cause: impl Into<BoxError>) -> Self {
        match &mut self {
            EnvError::Missing { .. } => {}
            EnvError::Validation { source, .. }
            | EnvError::Parse { source, .. }
            | EnvError::Transform { source, .. } => *source = Some(cause.into()),
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvError::Missing { .. } => ErrorKind::Missing,
            EnvError::Validation { .. } => ErrorKind::Validation,
            EnvError::Parse { .. } => ErrorKind::Parse,
            EnvError::Transform { .. } => ErrorKind::Transform,
        }
    }

    /// The resolved environment key the error is attributed to.
    pub fn key(&self) -> &str {
        match self {
            EnvError::Missing { key, .. }
            | EnvError::Validation { key, .. }
            | EnvError::Parse { key, .. }
            | EnvError::Transform { key, .. } => key,
        }
    }

    /// Structural path from the schema root to the failing node.
    pub fn path(&self) -> &[String] {
        match self {
            EnvError::Missing { path, .. }
            | EnvError::Validation { path, .. }
            | EnvError::Parse { path, .. }
            | EnvError::Transform { path, .. } => path,
        }
    }

    /// The message without the `key` prefix added by `Display`.
    pub fn message(&self) -> String {
        match self {
            EnvError::Missing { .. } => "Missing required value".to_string(),
            EnvError::Validation { message, .. }
            | EnvError::Parse { message, .. }
            | EnvError::Transform { message, .. } => message.clone(),
        }
    }
}
