//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zengshan_core::{Diviner, HexagramCatalog, HexagramResolver, Reading, ScriptedCoins};
use zengshan_providers::ApiConfig;
use zengshan_providers::retry::RetryConfig;
use zengshan_types::{ApiKey, NonEmptyString, PalaceConfigTable, Provider};

/// Coin script that yields the given backs count per throw, bottom first.
pub fn coins_for_backs(backs: [u8; 6]) -> String {
    backs
        .iter()
        .map(|&b| {
            let b = usize::from(b);
            format!("{}{}", "1".repeat(b), "0".repeat(3 - b))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a full divination over scripted coins.
pub fn scripted_reading(question: Option<&str>, backs: [u8; 6]) -> Reading {
    let catalog = HexagramCatalog::standard();
    let palaces = PalaceConfigTable::standard();
    let mut diviner = Diviner::new(HexagramResolver::new(&catalog, &palaces));
    diviner.begin(question.map(|q| NonEmptyString::new(q).unwrap()));
    let mut coins = ScriptedCoins::parse(&coins_for_backs(backs)).unwrap();
    diviner.throw_remaining(&mut coins).unwrap();
    diviner.finish().unwrap()
}

/// Retry policy with no meaningful delays.
pub fn fast_retry_config() -> RetryConfig {
    RetryConfig {
        max_retries: 2,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(10),
        jitter_factor: 0.0,
    }
}

pub fn mock_config(server: &MockServer, provider: Provider) -> ApiConfig {
    ApiConfig::new(ApiKey::new(provider, "test-key"), provider.default_model())
        .unwrap()
        .with_base_url(server.uri())
        .unwrap()
        .with_retry_config(fast_retry_config())
}

pub fn claude_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-5-20250929",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 10, "output_tokens": 20 }
    })
}

pub fn openai_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "resp_test",
        "object": "response",
        "model": "gpt-5.2",
        "status": "completed",
        "output": [{
            "id": "msg_test",
            "type": "message",
            "role": "assistant",
            "content": [{ "type": "output_text", "text": text }]
        }],
        "usage": { "input_tokens": 10, "output_tokens": 20, "total_tokens": 30 }
    })
}

/// Mount a Messages API response.
pub async fn mount_claude_response(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(claude_body(text)))
        .mount(server)
        .await;
}

/// Mount a Responses API response.
pub async fn mount_openai_response(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body(text)))
        .mount(server)
        .await;
}

/// The `zengshan` binary with an isolated home and no ambient API keys.
pub fn zengshan(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_zengshan"));
    cmd.env("HOME", home)
        .env("RUST_LOG", "off")
        .env_remove("ANTHROPIC_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .env_remove("ZENGSHAN_API_BASE_URL")
        .current_dir(home);
    cmd
}

pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}
