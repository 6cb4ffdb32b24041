//! Credential types for the poster credentials workspace.
//!
//! Responsibilities:
//! - Define the closed set of recognized credential names.
//! - Hold loaded credential values in an immutable `CredentialSet`.
//!
//! Does NOT handle:
//! - Reading the environment or `.env` files (see `loader` module).
//! - Validating credential format, length, or charset.
//!
//! Invariants:
//! - All values use `secrecy::SecretString` so `Debug` output never contains them.
//! - Lookup is total: every `CredentialName` maps to `Some(value)` or `None`.
//! - An empty string is a present value, not an absent one.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ACCESS_TOKEN_SECRET_VAR, ACCESS_TOKEN_VAR, API_KEY_VAR, API_SECRET_VAR, BEARER_TOKEN_VAR,
    OPENAI_KEY_VAR,
};
use crate::loader::ConfigError;

/// One of the fixed credential names this crate recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialName {
    BearerToken,
    ApiKey,
    ApiSecret,
    AccessToken,
    AccessTokenSecret,
    OpenaiKey,
}

impl CredentialName {
    /// Every recognized name, in declaration order.
    pub const ALL: [CredentialName; 6] = [
        CredentialName::BearerToken,
        CredentialName::ApiKey,
        CredentialName::ApiSecret,
        CredentialName::AccessToken,
        CredentialName::AccessTokenSecret,
        CredentialName::OpenaiKey,
    ];

    /// The environment variable this credential is read from.
    pub const fn env_key(self) -> &'static str {
        match self {
            CredentialName::BearerToken => BEARER_TOKEN_VAR,
            CredentialName::ApiKey => API_KEY_VAR,
            CredentialName::ApiSecret => API_SECRET_VAR,
            CredentialName::AccessToken => ACCESS_TOKEN_VAR,
            CredentialName::AccessTokenSecret => ACCESS_TOKEN_SECRET_VAR,
            CredentialName::OpenaiKey => OPENAI_KEY_VAR,
        }
    }

    /// The binding name consumers refer to (e.g. `api_key`).
    pub const fn as_str(self) -> &'static str {
        match self {
            CredentialName::BearerToken => "bearer_token",
            CredentialName::ApiKey => "api_key",
            CredentialName::ApiSecret => "api_secret",
            CredentialName::AccessToken => "access_token",
            CredentialName::AccessTokenSecret => "access_token_secret",
            CredentialName::OpenaiKey => "openai_key",
        }
    }
}

impl fmt::Display for CredentialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialName {
    type Err = ConfigError;

    /// Accepts either the binding name or the environment variable, in any case.
    /// Hyphens are treated as underscores so `api-key` also parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        CredentialName::ALL
            .into_iter()
            .find(|name| name.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownCredential(s.to_string()))
    }
}

/// The loaded credentials, read-only once built.
///
/// Build one at startup with [`crate::CredentialLoader`] (or [`crate::load`])
/// and pass it by reference to whatever needs a credential.
#[derive(Debug, Clone, Default)]
pub struct CredentialSet {
    bearer_token: Option<SecretString>,
    api_key: Option<SecretString>,
    api_secret: Option<SecretString>,
    access_token: Option<SecretString>,
    access_token_secret: Option<SecretString>,
    openai_key: Option<SecretString>,
}

impl CredentialSet {
    /// Look up a credential by name. Returns `None` when it was not set.
    pub fn get(&self, name: CredentialName) -> Option<&SecretString> {
        match name {
            CredentialName::BearerToken => self.bearer_token.as_ref(),
            CredentialName::ApiKey => self.api_key.as_ref(),
            CredentialName::ApiSecret => self.api_secret.as_ref(),
            CredentialName::AccessToken => self.access_token.as_ref(),
            CredentialName::AccessTokenSecret => self.access_token_secret.as_ref(),
            CredentialName::OpenaiKey => self.openai_key.as_ref(),
        }
    }

    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }

    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    pub fn api_secret(&self) -> Option<&SecretString> {
        self.api_secret.as_ref()
    }

    pub fn access_token(&self) -> Option<&SecretString> {
        self.access_token.as_ref()
    }

    pub fn access_token_secret(&self) -> Option<&SecretString> {
        self.access_token_secret.as_ref()
    }

    pub fn openai_key(&self) -> Option<&SecretString> {
        self.openai_key.as_ref()
    }

    /// Whether a value is bound for `name`.
    pub fn is_present(&self, name: CredentialName) -> bool {
        self.get(name).is_some()
    }

    /// Names with a bound value, in declaration order.
    pub fn present(&self) -> impl Iterator<Item = CredentialName> + '_ {
        CredentialName::ALL
            .into_iter()
            .filter(|name| self.is_present(*name))
    }

    /// Names without a bound value, in declaration order.
    pub fn missing(&self) -> impl Iterator<Item = CredentialName> + '_ {
        CredentialName::ALL
            .into_iter()
            .filter(|name| !self.is_present(*name))
    }

    /// Every name paired with its value (or `None`), in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (CredentialName, Option<&SecretString>)> + '_ {
        CredentialName::ALL
            .into_iter()
            .map(|name| (name, self.get(name)))
    }

    pub(crate) fn slot_mut(&mut self, name: CredentialName) -> &mut Option<SecretString> {
        match name {
            CredentialName::BearerToken => &mut self.bearer_token,
            CredentialName::ApiKey => &mut self.api_key,
            CredentialName::ApiSecret => &mut self.api_secret,
            CredentialName::AccessToken => &mut self.access_token,
            CredentialName::AccessTokenSecret => &mut self.access_token_secret,
            CredentialName::OpenaiKey => &mut self.openai_key,
        }
    }
}
