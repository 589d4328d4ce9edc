//! Configuration for Zengshan.
//!
//! ```toml
//! [app]
//! provider = "claude"
//! model = "claude-sonnet-4-5-20250929"
//!
//! [api_keys]
//! anthropic = "${ANTHROPIC_API_KEY}"
//! openai = "${OPENAI_API_KEY}"
//!
//! [interpretation]
//! timeout_secs = 120
//! max_output_tokens = 2048
//! max_retries = 2
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use zengshan_types::{ApiKey, ModelName, ModelNameKind, ModelParseError, Provider};

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;
pub const DEFAULT_MAX_RETRIES: u32 = 2;

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_max_output_tokens() -> u32 {
    DEFAULT_MAX_OUTPUT_TOKENS
}

const fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

#[derive(Debug, Default, Deserialize)]
pub struct ZengshanConfig {
    pub app: Option<AppConfig>,
    pub api_keys: Option<ApiKeys>,
    pub interpretation: Option<InterpretationConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// `claude` or `openai`. Inferred from `model` when absent.
    pub provider: Option<String>,
    pub model: Option<String>,
}

#[derive(Default, Deserialize)]
pub struct ApiKeys {
    pub anthropic: Option<String>,
    pub openai: Option<String>,
}

// Manual Debug impl to prevent leaking API keys in logs.
impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn mask(opt: Option<&String>) -> &'static str {
            if opt.is_some() { "[REDACTED]" } else { "None" }
        }
        f.debug_struct("ApiKeys")
            .field("anthropic", &mask(self.anthropic.as_ref()))
            .field("openai", &mask(self.openai.as_ref()))
            .finish()
    }
}

impl ApiKeys {
    fn raw(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Claude => self.anthropic.as_deref(),
            Provider::OpenAI => self.openai.as_deref(),
        }
    }
}

/// Interpretation request limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InterpretationConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for InterpretationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl InterpretationConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Replace `${VAR}` references with the variable's value (empty if unset).
/// Unclosed `${` and empty names are kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                out.push_str(&env::var(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            Some(end) => {
                // `${}` stays as written.
                out.push_str("${}");
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

impl ZengshanConfig {
    /// Load `~/.zengshan/config.toml`. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Failed to read config");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Failed to parse config");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Provider from `[app] provider`, else inferred from `[app] model`,
    /// else Claude.
    #[must_use]
    pub fn provider(&self) -> Provider {
        let app = self.app.as_ref();
        app.and_then(|app| app.provider.as_deref())
            .and_then(Provider::parse)
            .or_else(|| {
                app.and_then(|app| app.model.as_deref())
                    .and_then(Provider::from_model_name)
            })
            .unwrap_or_default()
    }

    /// Model for `provider`: the configured one if set, else the provider default.
    pub fn model(&self, provider: Provider) -> Result<ModelName, ModelParseError> {
        let Some(raw) = self.app.as_ref().and_then(|app| app.model.as_deref()) else {
            return Ok(provider.default_model());
        };
        let model = ModelName::parse(provider, raw)?;
        if model.kind() == ModelNameKind::Unverified {
            tracing::warn!(
                %model,
                provider = provider.as_str(),
                "Configured model is not a known model"
            );
        }
        Ok(model)
    }

    /// API key from the config file (after `${VAR}` expansion), falling back
    /// to the provider's environment variable.
    #[must_use]
    pub fn api_key(&self, provider: Provider) -> Option<ApiKey> {
        self.api_key_with(provider, |name| env::var(name).ok())
    }

    /// As [`Self::api_key`], with an explicit environment lookup.
    pub fn api_key_with(
        &self,
        provider: Provider,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> Option<ApiKey> {
        let from_file = self
            .api_keys
            .as_ref()
            .and_then(|keys| keys.raw(provider))
            .map(expand_env_vars)
            .filter(|key| !key.trim().is_empty());

        from_file
            .or_else(|| lookup_env(provider.env_var()).filter(|key| !key.trim().is_empty()))
            .map(|key| ApiKey::new(provider, key.trim()))
    }

    #[must_use]
    pub fn interpretation(&self) -> InterpretationConfig {
        self.interpretation.unwrap_or_default()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".zengshan").join("config.toml"))
}
