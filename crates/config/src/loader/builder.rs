//! Credential loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `CredentialLoader` that layers explicit values over environment values.
//! - Populate the process environment from a `.env` declarations file on request.
//! - Build the final immutable `CredentialSet`.
//!
//! Does NOT handle:
//! - Direct environment variable reading (delegated to env.rs).
//! - Validation of credential values.
//!
//! Invariants / Assumptions:
//! - `.env` values never override variables already present in the process environment.
//! - Builder values (`with_credential`) take precedence over environment variables,
//!   regardless of call order.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before the `.env` lookup runs.

use secrecy::SecretString;
use std::path::Path;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DOTENV_DISABLED_VAR, DOTENV_FILE_NAME};
use crate::types::{CredentialName, CredentialSet};

/// Loader that builds a `CredentialSet` from the environment and explicit values.
#[derive(Debug, Default)]
pub struct CredentialLoader {
    env: CredentialSet,
    overrides: CredentialSet,
}

impl CredentialLoader {
    /// Create a new credential loader with nothing bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// The file is searched for in the current directory and its ancestors.
    /// Variables already set in the process environment are left untouched,
    /// so calling this repeatedly is harmless.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    ///
    /// Lines that fail to parse are skipped with a warning; the remaining
    /// declarations are still applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvIo` if the `.env` file exists but cannot be
    /// opened or read. Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("dotenv loading disabled via {}", DOTENV_DISABLED_VAR);
            return Ok(self);
        }

        match dotenvy::from_filename_iter(DOTENV_FILE_NAME) {
            Ok(declarations) => {
                let applied = apply_declarations(declarations)?;
                tracing::debug!(applied, "loaded declarations file");
                Ok(self)
            }
            Err(e) if e.not_found() => {
                tracing::debug!("no .env file found, using process environment only");
                Ok(self)
            }
            Err(e) => Err(ConfigError::from_dotenv(e)),
        }
    }

    /// Load environment variables from an explicit declarations file.
    ///
    /// Same non-override and skip-malformed semantics as
    /// [`CredentialLoader::load_dotenv`]. The `DOTENV_DISABLED` gate does not
    /// apply, since the caller asked for this file by path. A missing file is
    /// still not an error.
    pub fn load_dotenv_from(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match dotenvy::from_path_iter(path) {
            Ok(declarations) => {
                let applied = apply_declarations(declarations)?;
                tracing::debug!(path = %path.display(), applied, "loaded declarations file");
                Ok(self)
            }
            Err(e) if e.not_found() => {
                tracing::warn!(path = %path.display(), "declarations file not found, skipping");
                Ok(self)
            }
            Err(e) => Err(ConfigError::from_dotenv(e)),
        }
    }

    /// Read credentials from environment variables.
    ///
    /// Re-reading replaces whatever a previous `from_env()` captured.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Bind a credential explicitly, taking precedence over the environment.
    pub fn with_credential(mut self, name: CredentialName, value: impl Into<String>) -> Self {
        *self.overrides.slot_mut(name) = Some(SecretString::new(value.into().into()));
        self
    }

    /// Build the final credential set.
    ///
    /// Never fails: names with no value are simply absent.
    pub fn build(self) -> CredentialSet {
        let Self { mut env, mut overrides } = self;
        for name in CredentialName::ALL {
            if let Some(value) = overrides.slot_mut(name).take() {
                *env.slot_mut(name) = Some(value);
            }
        }

        tracing::debug!(
            present = env.present().count(),
            missing = env.missing().count(),
            "credential set built"
        );
        env
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn set_env_credential(&mut self, name: CredentialName, value: Option<SecretString>) {
        *self.env.slot_mut(name) = value;
    }
}

/// Apply parsed declarations to the process environment, returning how many
/// were set.
///
/// Variables that already exist are left as they are. Malformed lines are
/// logged by position only, never by content. A read failure stops loading.
fn apply_declarations<I>(declarations: I) -> Result<usize, ConfigError>
where
    I: IntoIterator<Item = Result<(String, String), dotenvy::Error>>,
{
    let mut applied = 0;
    for (entry, item) in declarations.into_iter().enumerate() {
        match item {
            Ok((key, value)) => {
                if std::env::var_os(&key).is_some() {
                    continue;
                }
                // SAFETY: declarations are applied during startup, before any
                // other thread reads the environment.
                unsafe { std::env::set_var(&key, value) };
                applied += 1;
            }
            Err(dotenvy::Error::LineParse(_, position)) => {
                tracing::warn!(entry, position, "skipping malformed line in .env file");
            }
            Err(e) => return Err(ConfigError::from_dotenv(e)),
        }
    }
    Ok(applied)
}
