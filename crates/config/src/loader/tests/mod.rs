//! Tests for the credential loader builder.
//!
//! Responsibilities:
//! - Test builder methods and override precedence.
//! - Test `.env` loading, non-override semantics, and idempotence.
//! - Test environment reading into a `CredentialSet`.
//!
//! Invariants:
//! - Tests use `env_lock()` to prevent environment variable pollution.
//! - `CredentialEnvGuard` clears every credential variable before and after each test.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::MutexGuard;
use tempfile::TempDir;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::types::CredentialName;

pub mod env_tests;

/// Holds the global test lock and scrubs credential variables on entry and exit.
pub struct CredentialEnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl CredentialEnvGuard {
    pub fn new() -> Self {
        let lock = crate::test_util::env_lock();
        clear_credential_env();
        Self { _lock: lock }
    }
}

impl Drop for CredentialEnvGuard {
    fn drop(&mut self) {
        clear_credential_env();
    }
}

fn clear_credential_env() {
    unsafe {
        for name in CredentialName::ALL {
            std::env::remove_var(name.env_key());
        }
        std::env::remove_var(DOTENV_DISABLED_VAR);
    }
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
