//! Single credential lookup command.
//!
//! Prints the raw value to stdout so it can be captured by a shell, e.g.
//! `export API_KEY="$(poster-cli get api_key)"`. This is the only command
//! that exposes a secret.

use anyhow::Result;
use poster_config::{CredentialName, CredentialSet};
use secrecy::ExposeSecret;

use crate::error::CommandError;

pub fn run(credentials: &CredentialSet, name: &str) -> Result<()> {
    let name: CredentialName = name.parse()?;

    match credentials.get(name) {
        Some(value) => {
            println!("{}", value.expose_secret());
            Ok(())
        }
        None => Err(CommandError::CredentialMissing { name }.into()),
    }
}
