//! Environment variable reading for credentials.
//!
//! Responsibilities:
//! - Read the recognized credential variables from the process environment.
//! - Apply found values to a `CredentialLoader` instance.
//!
//! Does NOT handle:
//! - .env file loading (handled by `CredentialLoader::load_dotenv`).
//! - Building the final `CredentialSet` (see builder.rs).
//!
//! Invariants:
//! - Values are returned exactly as stored. No trimming, no empty-string filtering.
//! - Unset variables yield `None`. Reading never fails.
//! - Non-UTF-8 values are treated as unset and logged without their contents.

use secrecy::SecretString;
use std::env::VarError;

use super::builder::CredentialLoader;
use crate::types::CredentialName;

/// Read an environment variable, returning `None` if it is unset.
///
/// Unlike a validating reader, an empty value is returned as `Some("")`.
pub fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(var = key, "ignoring environment variable with non-UTF-8 value");
            None
        }
    }
}

/// Apply credential environment variables to the loader.
pub fn apply_env(loader: &mut CredentialLoader) {
    for name in CredentialName::ALL {
        let value = env_var(name.env_key()).map(|v| SecretString::new(v.into()));
        tracing::trace!(credential = %name, present = value.is_some(), "read credential from environment");
        loader.set_env_credential(name, value);
    }
}
