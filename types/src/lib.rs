//! Core domain types for Zengshan.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod code;
mod element;
mod ganzhi;
pub mod kinship;
mod line;
mod palace;

pub use code::{CODE_COUNT, CodeParseError, HexagramCode};
pub use element::Element;
pub use ganzhi::{Branch, Stem, StemBranch};
pub use kinship::{Kinship, classify, classify_all};
pub use line::{LINE_COUNT, Line, LineState, POSITION_NAMES};
pub use palace::{Palace, PalaceConfigTable, PalaceEntry};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

#[derive(Debug, Error)]
#[error("text must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Provider & Model Types
// ============================================================================

/// LLM providers that can act as the interpretation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Claude,
    OpenAI,
}

impl Provider {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::OpenAI => "openai",
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Claude => "Claude",
            Provider::OpenAI => "GPT",
        }
    }

    #[must_use]
    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::Claude => "ANTHROPIC_API_KEY",
            Provider::OpenAI => "OPENAI_API_KEY",
        }
    }

    #[must_use]
    pub fn default_model(&self) -> ModelName {
        match self {
            Provider::Claude => ModelName::known(*self, "claude-sonnet-4-5-20250929"),
            Provider::OpenAI => ModelName::known(*self, "gpt-5.2"),
        }
    }

    /// Models this provider is known to serve.
    #[must_use]
    pub fn available_models(&self) -> &'static [&'static str] {
        match self {
            Provider::Claude => &[
                "claude-sonnet-4-5-20250929",
                "claude-haiku-4-5-20251001",
                "claude-opus-4-5-20251101",
            ],
            Provider::OpenAI => &["gpt-5.2", "gpt-5-mini"],
        }
    }

    /// Parse provider from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "claude" | "anthropic" => Some(Provider::Claude),
            "openai" | "gpt" | "chatgpt" => Some(Provider::OpenAI),
            _ => None,
        }
    }

    /// Infer provider from model name prefix.
    #[must_use]
    pub fn from_model_name(model: &str) -> Option<Self> {
        let lower = model.trim().to_ascii_lowercase();
        if lower.starts_with("claude-") {
            Some(Provider::Claude)
        } else if lower.starts_with("gpt-") {
            Some(Provider::OpenAI)
        } else {
            None
        }
    }
}

/// Whether a model name is verified/known or user-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ModelNameKind {
    Known,
    #[default]
    Unverified,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelParseError {
    #[error("model name cannot be empty")]
    Empty,
    #[error("Claude model must start with claude- (got {0})")]
    ClaudePrefix(String),
    #[error("OpenAI model must start with gpt- (got {0})")]
    OpenAIPrefix(String),
}

/// Provider-scoped model name.
///
/// This prevents mixing model names across providers and makes unknown names explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelName {
    provider: Provider,
    #[serde(rename = "model")]
    name: Cow<'static, str>,
    #[serde(default)]
    kind: ModelNameKind,
}

impl ModelName {
    pub fn parse(provider: Provider, raw: &str) -> Result<Self, ModelParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelParseError::Empty);
        }

        let lower = trimmed.to_ascii_lowercase();
        match provider {
            Provider::Claude if !lower.starts_with("claude-") => {
                return Err(ModelParseError::ClaudePrefix(trimmed.to_string()));
            }
            Provider::OpenAI if !lower.starts_with("gpt-") => {
                return Err(ModelParseError::OpenAIPrefix(trimmed.to_string()));
            }
            _ => {}
        }

        if let Some(known) = provider
            .available_models()
            .iter()
            .find(|model| model.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::known(provider, *known));
        }

        Ok(Self {
            provider,
            name: Cow::Owned(trimmed.to_string()),
            kind: ModelNameKind::Unverified,
        })
    }

    #[must_use]
    pub const fn known(provider: Provider, name: &'static str) -> Self {
        Self {
            provider,
            name: Cow::Borrowed(name),
            kind: ModelNameKind::Known,
        }
    }

    #[must_use]
    pub const fn provider(&self) -> Provider {
        self.provider
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.name.as_ref()
    }

    #[must_use]
    pub const fn kind(&self) -> ModelNameKind {
        self.kind
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

// ============================================================================
// API Key Types
// ============================================================================

/// Provider-scoped API key.
///
/// `Debug` is manually implemented to redact the key value.
#[derive(Clone)]
pub enum ApiKey {
    Claude(String),
    OpenAI(String),
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKey::Claude(_) => write!(f, "ApiKey::Claude(<redacted>)"),
            ApiKey::OpenAI(_) => write!(f, "ApiKey::OpenAI(<redacted>)"),
        }
    }
}

impl ApiKey {
    #[must_use]
    pub fn new(provider: Provider, key: impl Into<String>) -> Self {
        match provider {
            Provider::Claude => ApiKey::Claude(key.into()),
            Provider::OpenAI => ApiKey::OpenAI(key.into()),
        }
    }

    #[must_use]
    pub fn provider(&self) -> Provider {
        match self {
            ApiKey::Claude(_) => Provider::Claude,
            ApiKey::OpenAI(_) => Provider::OpenAI,
        }
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        match self {
            ApiKey::Claude(key) | ApiKey::OpenAI(key) => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiKey, ModelName, ModelNameKind, ModelParseError, NonEmptyString, Provider};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        assert!(NonEmptyString::new("  \n").is_err());
        assert_eq!(NonEmptyString::new("问财运").unwrap().as_str(), "问财运");
    }

    #[test]
    fn provider_parse_aliases() {
        assert_eq!(Provider::parse("Anthropic"), Some(Provider::Claude));
        assert_eq!(Provider::parse("gpt"), Some(Provider::OpenAI));
        assert_eq!(Provider::parse("gemini"), None);
    }

    #[test]
    fn model_name_known_and_unverified() {
        let known = ModelName::parse(Provider::OpenAI, "GPT-5.2").unwrap();
        assert_eq!(known.kind(), ModelNameKind::Known);
        assert_eq!(known.as_str(), "gpt-5.2");

        let custom = ModelName::parse(Provider::Claude, "claude-custom").unwrap();
        assert_eq!(custom.kind(), ModelNameKind::Unverified);
    }

    #[test]
    fn model_name_rejects_wrong_prefix() {
        assert_eq!(
            ModelName::parse(Provider::Claude, "gpt-5.2"),
            Err(ModelParseError::ClaudePrefix("gpt-5.2".to_string()))
        );
        assert_eq!(ModelName::parse(Provider::OpenAI, " "), Err(ModelParseError::Empty));
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new(Provider::Claude, "sk-ant-secret");
        let debug = format!("{key:?}");
        assert!(!debug.contains("secret"));
        assert_eq!(key.provider(), Provider::Claude);
        assert_eq!(key.expose_secret(), "sk-ant-secret");
    }
}
