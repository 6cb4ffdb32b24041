//! Centralized constants for the poster credentials workspace.
//!
//! Environment variable names live here so the loader, the CLI and the
//! architecture tests agree on a single spelling.

// =============================================================================
// Declarations file
// =============================================================================

/// Conventional name of the local declarations file.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Setting this to `1` or `true` skips `.env` loading entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Credential environment variables
// =============================================================================

pub const BEARER_TOKEN_VAR: &str = "BEARER_TOKEN";
pub const API_KEY_VAR: &str = "API_KEY";
pub const API_SECRET_VAR: &str = "API_SECRET";
pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";
pub const ACCESS_TOKEN_SECRET_VAR: &str = "ACCESS_TOKEN_SECRET";

/// Key for the AI text-generation service.
pub const OPENAI_KEY_VAR: &str = "OPENAI_KEY";
