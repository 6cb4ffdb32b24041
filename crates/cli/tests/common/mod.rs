//! Shared test utilities for poster-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - No credential variable leaks in from the host environment.

use assert_cmd::Command;

pub const CREDENTIAL_VARS: [&str; 6] = [
    "BEARER_TOKEN",
    "API_KEY",
    "API_SECRET",
    "ACCESS_TOKEN",
    "ACCESS_TOKEN_SECRET",
    "OPENAI_KEY",
];

/// Returns a hermetic `poster-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Credential variables and `POSTER_ENV_FILE` are cleared.
pub fn poster_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("poster-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("POSTER_ENV_FILE").env_remove("RUST_LOG");

    cmd
}
