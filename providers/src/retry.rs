//! HTTP retry policy with exponential backoff.
//!
//! - Max retries: 2 by default (3 total attempts), configurable
//! - Initial delay: 500ms, doubling per retry, capped at 8 seconds
//! - Jitter: down-jitter up to 25% (multiplier in [0.75, 1.0])
//!
//! Retryable: HTTP 408, 409, 429, 5xx and connection errors. A server-sent
//! `x-should-retry` header overrides the status-based decision either way.
//!
//! Every attempt carries `X-Retry-Count` (0 for the first) and the same
//! `Idempotency-Key`.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode, header::HeaderMap};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial request.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    /// Down-jitter factor (0.25 = up to 25% shorter).
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            jitter_factor: 0.25,
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

/// `Retry-After-Ms` (float milliseconds) or `Retry-After` (integer seconds),
/// accepted only when strictly between zero and one minute.
#[must_use]
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let in_range = |d: Duration| d > Duration::ZERO && d < Duration::from_secs(60);

    let from_ms = headers
        .get("retry-after-ms")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map(|ms| Duration::from_secs_f64(ms / 1000.0))
        .filter(|d| in_range(*d));
    if from_ms.is_some() {
        return from_ms;
    }

    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .filter(|d| in_range(*d))
}

#[must_use]
pub fn should_retry(status: StatusCode, headers: &HeaderMap) -> bool {
    if let Some(val) = headers.get("x-should-retry")
        && let Ok(s) = val.to_str()
    {
        if s.eq_ignore_ascii_case("true") {
            return true;
        }
        if s.eq_ignore_ascii_case("false") {
            return false;
        }
    }

    matches!(status.as_u16(), 408 | 409 | 429 | 500..=599)
}

/// Delay before retry number `backoff_step + 1`. A valid `Retry-After`
/// header wins over the computed backoff.
#[must_use]
pub fn calculate_retry_delay(
    backoff_step: u32,
    config: &RetryConfig,
    headers: Option<&HeaderMap>,
) -> Duration {
    if let Some(delay) = headers.and_then(parse_retry_after) {
        return delay;
    }

    let base = config.initial_delay.as_secs_f64() * 2.0_f64.powi(backoff_step as i32);
    let capped = base.min(config.max_delay.as_secs_f64());
    let jitter = 1.0 - rand::random::<f64>() * config.jitter_factor;
    Duration::from_secs_f64(capped * jitter)
}

#[must_use]
pub fn generate_idempotency_key() -> String {
    format!("zengshan-retry-{}", Uuid::new_v4())
}

/// How a retried request ended.
#[derive(Debug)]
pub enum RetryOutcome {
    /// 2xx response.
    Success(Response),
    /// Non-2xx response that was not retried or ran out of retries.
    HttpError(Response),
    /// Transport failure after `attempts` tries.
    ConnectionError {
        attempts: u32,
        source: reqwest::Error,
    },
}

impl RetryOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

fn is_retryable_error(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout()
}

/// Send the request built by `build_request`, retrying per `config`.
pub async fn send_with_retry<F>(build_request: F, config: &RetryConfig) -> RetryOutcome
where
    F: Fn() -> RequestBuilder,
{
    let idempotency_key = generate_idempotency_key();
    let mut attempt = 0u32;

    loop {
        let retries_left = attempt < config.max_retries;
        let request = build_request()
            .header("X-Retry-Count", attempt.to_string())
            .header("Idempotency-Key", &idempotency_key);

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return RetryOutcome::Success(response);
                }
                if !retries_left || !should_retry(status, response.headers()) {
                    return RetryOutcome::HttpError(response);
                }
                let delay = calculate_retry_delay(attempt, config, Some(response.headers()));
                tracing::debug!(
                    status = %status,
                    retry_count = attempt + 1,
                    delay_ms = delay.as_millis(),
                    "Retrying interpretation request after error status"
                );
                tokio::time::sleep(delay).await;
            }
            Err(error) => {
                if !retries_left || !is_retryable_error(&error) {
                    return RetryOutcome::ConnectionError {
                        attempts: attempt + 1,
                        source: error,
                    };
                }
                let delay = calculate_retry_delay(attempt, config, None);
                tracing::debug!(
                    error = %error,
                    retry_count = attempt + 1,
                    delay_ms = delay.as_millis(),
                    "Retrying interpretation request after connection error"
                );
                tokio::time::sleep(delay).await;
            }
        }
        attempt += 1;
    }
}
