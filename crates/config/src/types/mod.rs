//! Credential type definitions.
//!
//! Responsibilities:
//! - Define the recognized credential names and the loaded credential set.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

mod credential;

pub use credential::{CredentialName, CredentialSet};
