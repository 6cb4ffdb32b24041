//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load credentials (done in `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poster-cli")]
#[command(about = "Inspect the credentials available to the poster application", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  poster-cli status\n  poster-cli status --output json\n  poster-cli get openai_key\n  poster-cli --env-file ./staging.env get BEARER_TOKEN\n"
)]
pub struct Cli {
    /// Declarations file to load instead of the `.env` lookup in the working directory
    #[arg(long, global = true, env = "POSTER_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Output format for `status` (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which credentials are set, without printing their values
    Status,

    /// Print the raw value of a single credential
    Get {
        /// Credential name (e.g. `api_key` or `API_KEY`)
        name: String,
    },
}
