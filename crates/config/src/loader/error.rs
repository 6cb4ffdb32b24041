//! Error types for credential loading.
//!
//! Responsibilities:
//! - Define error variants for unreadable declarations files and name parsing.
//!
//! Does NOT handle:
//! - Missing credential values. Absence is represented as `None`, never as an error.
//! - Malformed `.env` lines. Those are skipped with a warning (see builder.rs).
//!
//! Invariants:
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - A missing `.env` file is not an error and has no variant here.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during credential loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file exists but could not be opened or read.
    #[error("Failed to read .env file: {kind}. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    #[error(
        "Unknown credential '{0}'. Valid names: bearer_token, api_key, api_secret, access_token, access_token_secret, openai_key"
    )]
    UnknownCredential(String),
}

impl ConfigError {
    /// Map a dotenvy failure that stops loading. Callers handle not-found and
    /// malformed lines before reaching here.
    pub(crate) fn from_dotenv(err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown,
        }
    }
}
