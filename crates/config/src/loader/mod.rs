//! Credential loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Populate the process environment from an optional `.env` file.
//! - Provide a builder-pattern `CredentialLoader` that reads the fixed credential names.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Validating, rotating, or persisting credentials.
//!
//! Invariants / Assumptions:
//! - Already-set environment variables win over `.env` declarations.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::CredentialLoader;
pub use env::env_var;
pub use error::ConfigError;
