//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map `EnvError` kinds and `SchemaError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 2-6 are reserved for specific error categories.
//! - Anything that is not a load or schema error maps to `GeneralError`.

use envschema::{EnvError, ErrorKind, SchemaError};

/// Structured exit codes for envschema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the environment satisfied the schema.
    Success = 0,

    /// General error - unreadable files, bad arguments, output failures.
    GeneralError = 1,

    /// A required variable was absent or blank.
    Missing = 2,

    /// A value failed a type constraint or validator.
    Validation = 3,

    /// A value or schema node could not be interpreted.
    Parse = 4,

    /// A transform rejected a parsed value.
    Transform = 5,

    /// The schema document itself is malformed.
    ///
    /// Scripts should fix the schema; the environment was not inspected.
    Schema = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&EnvError> for ExitCode {
    fn from(err: &EnvError) -> Self {
        match err.kind() {
            ErrorKind::Missing => ExitCode::Missing,
            ErrorKind::Validation => ExitCode::Validation,
            ErrorKind::Parse => ExitCode::Parse,
            ErrorKind::Transform => ExitCode::Transform,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns `GeneralError` if no `EnvError` or `SchemaError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(env_err) = cause.downcast_ref::<EnvError>() {
                return ExitCode::from(env_err);
            }
            if cause.downcast_ref::<SchemaError>().is_some() {
                return ExitCode::Schema;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::Missing.as_i32(), 2);
        assert_eq!(ExitCode::Schema.as_i32(), 6);
    }

    #[test]
    fn test_env_error_kinds_map_to_codes() {
        let path = vec!["port".to_string()];
        assert_eq!(ExitCode::from(&EnvError::missing("PORT", &path)), ExitCode::Missing);
        assert_eq!(
            ExitCode::from(&EnvError::validation("PORT", "bad", &path)),
            ExitCode::Validation
        );
        assert_eq!(ExitCode::from(&EnvError::parse("PORT", "bad", &path)), ExitCode::Parse);
        assert_eq!(
            ExitCode::from(&EnvError::transform("PORT", "bad", &path)),
            ExitCode::Transform
        );
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err: anyhow::Error = Err::<(), _>(EnvError::missing("HOST", &[]))
            .context("Environment does not satisfy schema")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Missing);

        let err = anyhow::Error::from(SchemaError::EmptyEnum {
            path: "mode".to_string(),
        });
        assert_eq!(err.exit_code(), ExitCode::Schema);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
