//! Interpretation collaborator against mock provider servers

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zengshan_core::{Calendar, FixedCalendar, INTERPRETER_SYSTEM_PROMPT, build_interpretation_prompt};
use zengshan_providers::{ApiConfig, InterpretError, InterpretRequest, interpret, interpret_until};
use zengshan_types::{ApiKey, Provider};

use crate::common::{
    claude_body, fast_retry_config, mock_config, mount_openai_response, openai_body,
    scripted_reading,
};

fn request(prompt: &str) -> InterpretRequest<'_> {
    InterpretRequest {
        system_prompt: INTERPRETER_SYSTEM_PROMPT,
        prompt,
    }
}

#[tokio::test]
async fn claude_receives_reading_and_returns_text() {
    let server = MockServer::start().await;
    let reading = scripted_reading(Some("问婚姻"), [3; 6]);
    let calendar = FixedCalendar::new(2026, 10, 17).unwrap().today().unwrap();
    let prompt = build_interpretation_prompt(None, &calendar, &reading);

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "system": INTERPRETER_SYSTEM_PROMPT,
            "messages": [{ "role": "user", "content": prompt }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(claude_body("乾变坤，阳极转阴。")))
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(&server, Provider::Claude);
    let interpretation = interpret(&config, &request(&prompt)).await.unwrap();
    assert_eq!(interpretation.text, "乾变坤，阳极转阴。");
    assert_eq!(interpretation.usage.unwrap().output_tokens, 20);
}

#[tokio::test]
async fn openai_uses_bearer_auth_and_responses_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({ "input": "卦象" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_body("吉")))
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(&server, Provider::OpenAI);
    let interpretation = interpret(&config, &request("卦象")).await.unwrap();
    assert_eq!(interpretation.text, "吉");
    assert_eq!(interpretation.model, "gpt-5.2");
}

#[tokio::test]
async fn overloaded_then_success_is_retried() {
    let server = MockServer::start().await;
    let attempts = AtomicU32::new(0);
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(move |_: &wiremock::Request| {
            if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                ResponseTemplate::new(529)
            } else {
                ResponseTemplate::new(200).set_body_json(claude_body("平"))
            }
        })
        .expect(2)
        .mount(&server)
        .await;

    let config = mock_config(&server, Provider::Claude);
    let interpretation = interpret(&config, &request("卦象")).await.unwrap();
    assert_eq!(interpretation.text, "平");
}

#[tokio::test]
async fn api_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(&server, Provider::OpenAI);
    let err = interpret(&config, &request("卦象")).await.unwrap_err();
    match err {
        InterpretError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Incorrect API key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(claude_body("迟"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = mock_config(&server, Provider::Claude).with_timeout(Duration::from_millis(100));
    let err = interpret(&config, &request("卦象")).await.unwrap_err();
    assert!(matches!(err, InterpretError::Timeout(_)));
}

#[tokio::test]
async fn cancellation_abandons_the_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(claude_body("迟"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = mock_config(&server, Provider::Claude);
    let (cancel_tx, cancel_rx) = tokio::sync::oneshot::channel::<()>();
    let cancel = async {
        let _ = cancel_rx.await;
    };
    let _ = cancel_tx.send(());

    let err = interpret_until(&config, &request("卦象"), cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, InterpretError::Cancelled));
}

#[tokio::test]
async fn blank_output_is_empty_response() {
    let server = MockServer::start().await;
    mount_openai_response(&server, "   ").await;

    let config = mock_config(&server, Provider::OpenAI);
    let err = interpret(&config, &request("卦象")).await.unwrap_err();
    assert!(matches!(err, InterpretError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let config = ApiConfig::new(
        ApiKey::new(Provider::Claude, "test-key"),
        Provider::Claude.default_model(),
    )
    .unwrap()
    .with_base_url("http://127.0.0.1:1")
    .unwrap()
    .with_retry_config(fast_retry_config());

    let err = interpret(&config, &request("卦象")).await.unwrap_err();
    assert!(matches!(err, InterpretError::Transport { attempts: 3, .. }));
}
