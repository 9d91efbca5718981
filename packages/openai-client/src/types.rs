//! OpenAI Responses API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Responses API
// =============================================================================

/// Request against the Responses API (`POST /v1/responses`).
#[derive(Debug, Clone, Serialize)]
pub struct ResponseRequest {
    /// Model to use (e.g., "gpt-4o", "gpt-4o-mini")
    pub model: String,

    /// Input messages for this turn
    pub input: Vec<InputMessage>,

    /// Continuation id of a prior response to resume its conversation.
    /// Omitted entirely when not chaining (the API rejects null here).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_response_id: Option<String>,

    /// Sampling temperature (0.0 to 2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Cap on tokens generated for this response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl ResponseRequest {
    /// Create a new request with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: Vec::new(),
            previous_response_id: None,
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Add an input message.
    pub fn message(mut self, message: InputMessage) -> Self {
        self.input.push(message);
        self
    }

    /// Chain this request onto a prior response.
    pub fn previous_response_id(mut self, id: impl Into<String>) -> Self {
        self.previous_response_id = Some(id.into());
        self
    }

    /// Chain onto a prior response only when an id is present.
    pub fn maybe_previous_response_id(mut self, id: Option<impl Into<String>>) -> Self {
        self.previous_response_id = id.map(Into::into);
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the output token cap.
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// Input message for a Responses API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMessage {
    /// Role: "developer", "user", "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl InputMessage {
    /// Create a developer (instruction) message.
    pub fn developer(content: impl Into<String>) -> Self {
        Self {
            role: "developer".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A completed model response.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    /// Response id, usable as `previous_response_id` on a later call
    pub id: String,

    /// Concatenated text of all output_text items
    pub output_text: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Raw response from the API (for internal parsing).
///
/// The Responses API returns a list of output items (reasoning,
/// messages, tool calls); the assistant text lives in `message` items
/// as `output_text` content parts.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseRaw {
    pub id: String,
    #[serde(default)]
    pub output: Vec<OutputItem>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentPart {
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(default)]
    pub text: String,
}

impl ResponseRaw {
    /// Concatenate every `output_text` part across message items.
    pub(crate) fn output_text(&self) -> String {
        let mut out = String::new();
        for item in &self.output {
            if item.item_type != "message" {
                continue;
            }
            for part in &item.content {
                if part.part_type == "output_text" {
                    out.push_str(&part.text);
                }
            }
        }
        out
    }

    /// Whether any assistant message item was returned at all.
    pub(crate) fn has_message(&self) -> bool {
        self.output.iter().any(|item| item.item_type == "message")
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the input
    pub input_tokens: u32,

    /// Tokens in the generated output
    pub output_tokens: u32,

    /// Total tokens used
    pub total_tokens: u32,
}
