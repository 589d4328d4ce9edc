//! Interpretation collaborator: sends a divination prompt to an LLM and
//! returns its free-text reading.
//!
//! - [`interpret`] dispatches on the configured provider
//! - [`claude`] speaks the Anthropic Messages API
//! - [`openai`] speaks the OpenAI Responses API
//!
//! Both are non-streaming. The whole exchange, retries included, runs under
//! the [`ApiConfig`] timeout. [`interpret_until`] additionally races it
//! against a caller-supplied cancellation future.

pub mod claude;
pub mod openai;
pub mod response_types;
pub mod retry;

use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

pub use zengshan_types;
use zengshan_types::{ApiKey, ModelName, Provider};

use crate::retry::{RetryConfig, RetryOutcome};

/// Canonical Anthropic API base URL.
pub const CLAUDE_API_BASE_URL: &str = "https://api.anthropic.com";
/// Canonical OpenAI API base URL.
pub const OPENAI_API_BASE_URL: &str = "https://api.openai.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

const CONNECT_TIMEOUT_SECS: u64 = 30;
const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;
const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// Shared client. Scheme policy is enforced per base URL in
/// [`ApiConfig::with_base_url`], so the client itself allows plain HTTP.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build tuned HTTP client: {e}. Falling back to defaults.");
            reqwest::Client::new()
        })
    })
}

fn base_client_builder() -> reqwest::ClientBuilder {
    use reqwest::header::{HeaderMap, HeaderValue};

    let mut default_headers = HeaderMap::new();
    default_headers.insert(
        "User-Agent",
        HeaderValue::from_static(concat!("zengshan/", env!("CARGO_PKG_VERSION"))),
    );

    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .default_headers(default_headers)
}

#[derive(Debug, Error)]
pub enum ApiConfigError {
    #[error("API key provider {key:?} does not match model provider {model:?}")]
    ProviderMismatch { key: Provider, model: Provider },
    #[error("base URL must use https (plain http is allowed only for localhost): {0}")]
    InsecureBaseUrl(String),
}

/// Provider, credentials and request limits for one interpretation call.
///
/// The constructor enforces that the API key and model belong to the same
/// provider.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_key: ApiKey,
    model: ModelName,
    base_url: Option<String>,
    timeout: Duration,
    max_output_tokens: u32,
    retry: RetryConfig,
}

impl ApiConfig {
    pub fn new(api_key: ApiKey, model: ModelName) -> Result<Self, ApiConfigError> {
        let key_provider = api_key.provider();
        let model_provider = model.provider();
        if key_provider != model_provider {
            return Err(ApiConfigError::ProviderMismatch {
                key: key_provider,
                model: model_provider,
            });
        }

        Ok(Self {
            api_key,
            model,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            retry: RetryConfig::default(),
        })
    }

    /// Point requests at another server. Only `https://` URLs, or `http://`
    /// on a loopback host, are accepted.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ApiConfigError> {
        let base_url = base_url.into();
        if !is_acceptable_base_url(&base_url) {
            return Err(ApiConfigError::InsecureBaseUrl(base_url));
        }
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        Ok(self)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    #[must_use]
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn provider(&self) -> Provider {
        self.api_key.provider()
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    #[must_use]
    pub fn model(&self) -> &ModelName {
        &self.model
    }

    /// Configured base URL, or the provider's canonical one.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| match self.provider() {
                Provider::Claude => CLAUDE_API_BASE_URL,
                Provider::OpenAI => OPENAI_API_BASE_URL,
            })
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    #[must_use]
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }
}

fn is_acceptable_base_url(url: &str) -> bool {
    if url.starts_with("https://") {
        return true;
    }
    let Some(rest) = url.strip_prefix("http://") else {
        return false;
    };
    let host = rest.split(['/', ':']).next().unwrap_or_default();
    matches!(host, "localhost" | "127.0.0.1") || rest.starts_with("[::1]")
}

/// What to ask the model.
#[derive(Debug, Clone, Copy)]
pub struct InterpretRequest<'a> {
    pub system_prompt: &'a str,
    pub prompt: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// The model's reading. The text is opaque to the rest of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub text: String,
    pub model: String,
    pub usage: Option<TokenUsage>,
    /// Whether the provider cut the output short (token limit).
    pub truncated: bool,
}

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("interpretation timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("interpretation cancelled")]
    Cancelled,
    #[error("request failed after {attempts} attempt(s): {source}")]
    Transport {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("model returned no text")]
    EmptyResponse,
    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Ask the configured provider to interpret `request`.
pub async fn interpret(
    config: &ApiConfig,
    request: &InterpretRequest<'_>,
) -> Result<Interpretation, InterpretError> {
    let provider = config.provider();
    tracing::info!(
        provider = provider.as_str(),
        model = config.model().as_str(),
        prompt_chars = request.prompt.chars().count(),
        "Requesting interpretation"
    );

    let call = async {
        match provider {
            Provider::Claude => claude::interpret(config, request).await,
            Provider::OpenAI => openai::interpret(config, request).await,
        }
    };

    let result = match tokio::time::timeout(config.timeout(), call).await {
        Ok(result) => result,
        Err(_) => Err(InterpretError::Timeout(config.timeout())),
    };

    match &result {
        Ok(interpretation) => tracing::info!(
            model = %interpretation.model,
            chars = interpretation.text.chars().count(),
            truncated = interpretation.truncated,
            "Interpretation received"
        ),
        Err(error) => tracing::warn!(%error, "Interpretation failed"),
    }
    result
}

/// As [`interpret`], abandoning the call with [`InterpretError::Cancelled`]
/// as soon as `cancel` resolves.
pub async fn interpret_until<C>(
    config: &ApiConfig,
    request: &InterpretRequest<'_>,
    cancel: C,
) -> Result<Interpretation, InterpretError>
where
    C: Future<Output = ()>,
{
    tokio::select! {
        result = interpret(config, request) => result,
        () = cancel => {
            tracing::info!("Interpretation cancelled by caller");
            Err(InterpretError::Cancelled)
        }
    }
}

/// POST `body` as JSON with retries and return the successful response body.
pub(crate) async fn post_json<F>(
    build_request: F,
    retry: &RetryConfig,
) -> Result<Vec<u8>, InterpretError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    let response = match retry::send_with_retry(build_request, retry).await {
        RetryOutcome::Success(response) => response,
        RetryOutcome::HttpError(response) => {
            let status = response.status().as_u16();
            let body = read_capped_error_body(response).await;
            return Err(InterpretError::Api {
                status,
                message: extract_error_message(&body),
            });
        }
        RetryOutcome::ConnectionError { attempts, source } => {
            return Err(InterpretError::Transport { attempts, source });
        }
    };

    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|source| InterpretError::Transport {
            attempts: 1,
            source,
        })
}

pub async fn read_capped_error_body(mut response: reqwest::Response) -> String {
    let mut body = Vec::new();
    while let Ok(Some(chunk)) = response.chunk().await {
        body.extend_from_slice(&chunk);
        if body.len() > MAX_ERROR_BODY_BYTES {
            body.truncate(MAX_ERROR_BODY_BYTES);
            let text = String::from_utf8_lossy(&body);
            return format!("{text}...(truncated)");
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

/// Pull `error.message` out of a provider error body, or return the body.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<response_types::ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => match envelope.error.error_type {
            Some(kind) => format!("{kind}: {}", envelope.error.message),
            None => envelope.error.message,
        },
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ApiConfig, ApiConfigError, CLAUDE_API_BASE_URL, extract_error_message,
        is_acceptable_base_url,
    };
    use zengshan_types::{ApiKey, Provider};

    #[test]
    fn api_config_rejects_mismatched_provider() {
        let key = ApiKey::new(Provider::Claude, "test");
        let model = Provider::OpenAI.default_model();
        assert!(matches!(
            ApiConfig::new(key, model),
            Err(ApiConfigError::ProviderMismatch { .. })
        ));
    }

    #[test]
    fn api_config_defaults_to_canonical_base_url() {
        let key = ApiKey::new(Provider::Claude, "test");
        let config = ApiConfig::new(key, Provider::Claude.default_model()).unwrap();
        assert_eq!(config.base_url(), CLAUDE_API_BASE_URL);
        assert_eq!(config.timeout().as_secs(), 120);
    }

    #[test]
    fn base_url_scheme_policy() {
        assert!(is_acceptable_base_url("https://proxy.example.com"));
        assert!(is_acceptable_base_url("http://127.0.0.1:8080"));
        assert!(is_acceptable_base_url("http://localhost/api"));
        assert!(is_acceptable_base_url("http://[::1]:9000"));
        assert!(!is_acceptable_base_url("http://api.example.com"));
        assert!(!is_acceptable_base_url("http://localhost.evil.com"));
        assert!(!is_acceptable_base_url("ftp://127.0.0.1"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let key = ApiKey::new(Provider::OpenAI, "test");
        let config = ApiConfig::new(key, Provider::OpenAI.default_model())
            .unwrap()
            .with_base_url("http://127.0.0.1:1234/")
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn error_message_extraction() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        assert_eq!(extract_error_message(body), "overloaded_error: Overloaded");
        let body = r#"{"error":{"message":"Incorrect API key"}}"#;
        assert_eq!(extract_error_message(body), "Incorrect API key");
        assert_eq!(extract_error_message(" gateway down \n"), "gateway down");
    }
}
