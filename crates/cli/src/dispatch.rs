//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Credential loading (see `main()`).
//!
//! Invariants:
//! - Every handler receives the same `CredentialSet`, built once at startup.

use anyhow::Result;
use poster_config::CredentialSet;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, credentials: &CredentialSet) -> Result<()> {
    match cli.command {
        Commands::Status => commands::status::run(credentials, &cli.output)?,
        Commands::Get { name } => commands::get::run(credentials, &name)?,
    }

    Ok(())
}
