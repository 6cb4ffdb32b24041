//! CLI exit codes and command errors.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map command and loader errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code numbering stays aligned with the other workspace CLIs (4 = not found, 5 = validation).
//! - Error messages never contain credential values.

use poster_config::{ConfigError, CredentialName};
use thiserror::Error;

/// Errors raised by command handlers.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Credential '{name}' is not set (export {} or add it to .env)", .name.env_key())]
    CredentialMissing { name: CredentialName },

    #[error("Invalid output format: {0}. Valid options: json, table")]
    InvalidOutputFormat(String),
}

/// Structured exit codes for poster-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Requested credential has no value.
    NotFound = 4,

    /// Validation error - unknown credential name or bad option.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CommandError> for ExitCode {
    fn from(err: &CommandError) -> Self {
        match err {
            CommandError::CredentialMissing { .. } => ExitCode::NotFound,
            CommandError::InvalidOutputFormat(_) => ExitCode::ValidationError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::UnknownCredential(_) => ExitCode::ValidationError,
            ConfigError::DotenvIo { .. } | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CommandError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
        }

        ExitCode::GeneralError
    }
}
