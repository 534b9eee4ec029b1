//! `.env` file reading.
//!
//! Responsibilities:
//! - Read a `.env` file into an in-memory map used as a fallback source.
//! - Enforce the `DOTENV_DISABLED` gate so tests stay hermetic.
//!
//! Does NOT handle:
//! - Writing to the process environment; the file is never applied with
//!   `set_var`, so process variables always win.
//!
//! Invariants / Assumptions:
//! - A missing file is not an error.
//! - Errors never include line content, which may hold secrets.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotenvError {
    /// SAFETY: only the byte index of the failure is reported, not the line.
    #[error(
        "Failed to parse .env file at position {index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    Parse { index: usize },

    #[error("Failed to read .env file: {kind}")]
    Io { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    Unknown,
}

impl From<dotenvy::Error> for DotenvError {
    fn from(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, index) => DotenvError::Parse { index },
            dotenvy::Error::Io(io_err) => DotenvError::Io {
                kind: io_err.kind(),
            },
            _ => DotenvError::Unknown,
        }
    }
}

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Read `path` into a map, or an empty map when disabled or absent.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, DotenvError> {
    if dotenv_disabled() {
        tracing::debug!("DOTENV_DISABLED is set, skipping .env file");
        return Ok(HashMap::new());
    }

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No .env file found");
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item?;
        vars.insert(key, value);
    }
    tracing::debug!(path = %path.display(), count = vars.len(), "Read .env file");
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_empty_map() {
        let dir = TempDir::new().unwrap();
        let vars = read_env_file(&dir.path().join(".env")).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_parse_error_hides_line_content() {
        let err = DotenvError::from(dotenvy::Error::LineParse("SECRET=\"abc".to_string(), 7));
        let message = err.to_string();
        assert!(message.contains("position 7"));
        assert!(!message.contains("SECRET"));
    }
}
