//! Poster CLI - inspect the credentials available to the poster application.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load credentials once at startup and hand them to the selected command.
//!
//! Does NOT handle:
//! - Credential loading rules (see `crates/config`).
//!
//! Invariants:
//! - Logging is initialized BEFORE credential loading so loader events are captured.
//! - A `.env` file that cannot be read or parsed is reported as a warning; the
//!   process keeps going with the existing environment.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use poster_config::{CredentialLoader, CredentialSet};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Blank/whitespace-only values fall back to the conventional .env lookup
    let env_file = cli
        .env_file
        .as_deref()
        .filter(|path| !path.to_string_lossy().trim().is_empty());
    let credentials = load_credentials(env_file);

    let exit_code = match run_command(cli, &credentials) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn load_credentials(env_file: Option<&Path>) -> CredentialSet {
    let loader = CredentialLoader::new();
    let loaded = match env_file {
        Some(path) => loader.load_dotenv_from(path),
        None => loader.load_dotenv(),
    };

    let loader = match loaded {
        Ok(loader) => loader,
        Err(e) => {
            tracing::warn!(error = %e, "declarations file skipped");
            eprintln!("Warning: {}. Continuing with the process environment only.", e);
            CredentialLoader::new()
        }
    };

    loader.from_env().build()
}
