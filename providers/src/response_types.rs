//! Typed response bodies for the non-streaming provider endpoints.
//!
//! Unknown variants deserialize to `Unknown` so newer API output does not
//! break decoding.

use serde::Deserialize;

/// `{"error": {"type": ..., "message": ...}}`, shared by both providers.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorInfo,
}

#[derive(Debug, Deserialize)]
pub struct ErrorInfo {
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub message: String,
}

pub mod claude {
    use serde::Deserialize;

    /// Anthropic Messages API response.
    #[derive(Debug, Deserialize)]
    pub struct MessageResponse {
        #[serde(default)]
        pub model: String,
        #[serde(default)]
        pub content: Vec<ContentBlock>,
        #[serde(default)]
        pub stop_reason: Option<String>,
        #[serde(default)]
        pub usage: Option<Usage>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    pub enum ContentBlock {
        Text {
            text: String,
        },
        #[serde(other)]
        Unknown,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Usage {
        #[serde(default)]
        pub input_tokens: u32,
        #[serde(default)]
        pub output_tokens: u32,
    }
}

pub mod openai {
    use serde::Deserialize;

    /// OpenAI Responses API response.
    #[derive(Debug, Deserialize)]
    pub struct Response {
        #[serde(default)]
        pub model: String,
        #[serde(default)]
        pub status: Option<String>,
        #[serde(default)]
        pub output: Vec<OutputItem>,
        #[serde(default)]
        pub usage: Option<Usage>,
        #[serde(default)]
        pub incomplete_details: Option<IncompleteDetails>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    pub enum OutputItem {
        Message {
            #[serde(default)]
            content: Vec<MessageContent>,
        },
        #[serde(other)]
        Unknown,
    }

    #[derive(Debug, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    pub enum MessageContent {
        OutputText {
            text: String,
        },
        Refusal {
            refusal: String,
        },
        #[serde(other)]
        Unknown,
    }

    #[derive(Debug, Deserialize)]
    pub struct IncompleteDetails {
        #[serde(default)]
        pub reason: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct Usage {
        #[serde(default)]
        pub input_tokens: u32,
        #[serde(default)]
        pub output_tokens: u32,
    }
}
