//! Credential loading for the poster application.
//!
//! This crate reads a fixed set of credentials (bearer token, API key and
//! secret, access token and secret, AI-service key) from the process
//! environment, optionally populated from a local `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, CredentialLoader, env_var};
pub use types::{CredentialName, CredentialSet};

/// Load `.env` (if present) and read every credential from the environment.
///
/// Missing credentials are `None` in the returned set. The only errors come
/// from a `.env` file that exists but cannot be read or parsed.
pub fn load() -> Result<CredentialSet, ConfigError> {
    Ok(CredentialLoader::new().load_dotenv()?.from_env().build())
}
