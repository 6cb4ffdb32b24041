//! Output formatters for CLI commands.
//!
//! Provides table and JSON output for credential status reports.

use anyhow::Result;
use poster_config::{CredentialName, CredentialSet};
use serde::Serialize;

use crate::error::CommandError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self, CommandError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(CommandError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// Presence of one credential. Never carries the value itself.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialStatus {
    pub name: CredentialName,
    pub env_var: &'static str,
    pub present: bool,
}

impl CredentialStatus {
    pub fn collect(credentials: &CredentialSet) -> Vec<Self> {
        credentials
            .iter()
            .map(|(name, value)| CredentialStatus {
                name,
                env_var: name.env_key(),
                present: value.is_some(),
            })
            .collect()
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a credential status report.
    fn format_status(&self, statuses: &[CredentialStatus]) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_status(&self, statuses: &[CredentialStatus]) -> Result<String> {
        Ok(serde_json::to_string_pretty(statuses)?)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_status(&self, statuses: &[CredentialStatus]) -> Result<String> {
        let mut output = String::new();

        output.push_str("Name\tEnv Var\tStatus\n");
        for status in statuses {
            let state = if status.present { "set" } else { "missing" };
            output.push_str(&format!("{}\t{}\t{}\n", status.name, status.env_var, state));
        }

        let present = statuses.iter().filter(|s| s.present).count();
        output.push_str(&format!("\n{} of {} credentials set\n", present, statuses.len()));

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poster_config::CredentialLoader;

    fn sample_set() -> CredentialSet {
        CredentialLoader::new()
            .with_credential(CredentialName::ApiKey, "k-123")
            .with_credential(CredentialName::OpenaiKey, "sk-456")
            .build()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(CommandError::InvalidOutputFormat(ref s)) if s == "csv"
        ));
    }

    #[test]
    fn test_table_lists_every_credential() {
        let statuses = CredentialStatus::collect(&sample_set());
        let output = TableFormatter.format_status(&statuses).unwrap();

        assert!(output.contains("api_key\tAPI_KEY\tset"));
        assert!(output.contains("bearer_token\tBEARER_TOKEN\tmissing"));
        assert!(output.contains("2 of 6 credentials set"));
    }

    #[test]
    fn test_json_has_presence_only() {
        let statuses = CredentialStatus::collect(&sample_set());
        let output = JsonFormatter.format_status(&statuses).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[1]["name"], "api_key");
        assert_eq!(entries[1]["env_var"], "API_KEY");
        assert_eq!(entries[1]["present"], true);
        assert!(!output.contains("k-123"));
        assert!(!output.contains("sk-456"));
    }
}
