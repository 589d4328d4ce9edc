//! Anthropic Messages API, non-streaming.

use serde_json::{Value, json};

use crate::response_types::claude::{ContentBlock, MessageResponse};
use crate::{ApiConfig, InterpretError, InterpretRequest, Interpretation, TokenUsage, http_client};

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub(crate) fn build_request_body(config: &ApiConfig, request: &InterpretRequest<'_>) -> Value {
    json!({
        "model": config.model().as_str(),
        "max_tokens": config.max_output_tokens(),
        "system": request.system_prompt,
        "messages": [
            { "role": "user", "content": request.prompt }
        ],
    })
}

pub(crate) fn parse_response(bytes: &[u8]) -> Result<Interpretation, InterpretError> {
    let response: MessageResponse = serde_json::from_slice(bytes)?;

    let text = response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Unknown => None,
        })
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(InterpretError::EmptyResponse);
    }

    Ok(Interpretation {
        text,
        model: response.model,
        usage: response.usage.map(|usage| TokenUsage {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }),
        truncated: response.stop_reason.as_deref() == Some("max_tokens"),
    })
}

pub async fn interpret(
    config: &ApiConfig,
    request: &InterpretRequest<'_>,
) -> Result<Interpretation, InterpretError> {
    let client = http_client();
    let url = format!("{}{MESSAGES_PATH}", config.base_url());
    let body = build_request_body(config, request);
    let api_key = config.api_key();

    let bytes = crate::post_json(
        || {
            client
                .post(&url)
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&body)
        },
        config.retry_config(),
    )
    .await?;

    parse_response(&bytes)
}
