//! Credential status command.
//!
//! Reports which credentials are bound. Missing credentials are reported,
//! not treated as failures.

use anyhow::Result;
use poster_config::CredentialSet;

use crate::formatters::{CredentialStatus, OutputFormat, get_formatter};

pub fn run(credentials: &CredentialSet, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let statuses = CredentialStatus::collect(credentials);

    let missing: Vec<_> = credentials.missing().collect();
    if !missing.is_empty() {
        tracing::info!(?missing, "some credentials are not set");
    }

    let formatter = get_formatter(format);
    print!("{}", formatter.format_status(&statuses)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
