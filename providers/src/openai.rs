//! OpenAI Responses API, non-streaming.
//!
//! The system prompt goes in `instructions`; the divination payload is the
//! sole `input`. Output text is the concatenation of every `output_text`
//! part across message items, skipping reasoning items.

use serde_json::{Value, json};

use crate::response_types::openai::{MessageContent, OutputItem, Response};
use crate::{ApiConfig, InterpretError, InterpretRequest, Interpretation, TokenUsage, http_client};

const RESPONSES_PATH: &str = "/v1/responses";

pub(crate) fn build_request_body(config: &ApiConfig, request: &InterpretRequest<'_>) -> Value {
    json!({
        "model": config.model().as_str(),
        "instructions": request.system_prompt,
        "input": request.prompt,
        "max_output_tokens": config.max_output_tokens(),
        "store": false,
    })
}

pub(crate) fn parse_response(bytes: &[u8]) -> Result<Interpretation, InterpretError> {
    let response: Response = serde_json::from_slice(bytes)?;

    let mut text = String::new();
    let mut refusal = None;
    for item in response.output {
        let OutputItem::Message { content } = item else {
            continue;
        };
        for part in content {
            match part {
                MessageContent::OutputText { text: chunk } => text.push_str(&chunk),
                MessageContent::Refusal { refusal: reason } => refusal = Some(reason),
                MessageContent::Unknown => {}
            }
        }
    }

    if text.trim().is_empty() {
        if let Some(reason) = refusal {
            tracing::warn!(%reason, "Model refused to interpret");
        }
        return Err(InterpretError::EmptyResponse);
    }

    let truncated = response.status.as_deref() == Some("incomplete")
        && response
            .incomplete_details
            .and_then(|details| details.reason)
            .as_deref()
            == Some("max_output_tokens");

    Ok(Interpretation {
        text,
        model: response.model,
        usage: response.usage.map(|usage| TokenUsage {
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
        }),
        truncated,
    })
}

pub async fn interpret(
    config: &ApiConfig,
    request: &InterpretRequest<'_>,
) -> Result<Interpretation, InterpretError> {
    let client = http_client();
    let url = format!("{}{RESPONSES_PATH}", config.base_url());
    let body = build_request_body(config, request);
    let auth_header = format!("Bearer {}", config.api_key());

    let bytes = crate::post_json(
        || {
            client
                .post(&url)
                .header("Authorization", &auth_header)
                .header("content-type", "application/json")
                .json(&body)
        },
        config.retry_config(),
    )
    .await?;

    parse_response(&bytes)
}
