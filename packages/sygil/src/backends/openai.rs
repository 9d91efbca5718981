//! OpenAI implementation of the text backend.
//!
//! A reference implementation over the Responses API, which carries the
//! conversation chaining the pipeline needs: each reply's id can be fed
//! into a later call's `previous_response_id`.

use async_trait::async_trait;
use openai_client::{InputMessage, OpenAIClient, OpenAIError, ResponseRequest};

use crate::error::{Result, SygilError};
use crate::traits::{BackendReply, BackendRequest, TextBackend};

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// OpenAI-backed text backend.
#[derive(Clone)]
pub struct OpenAIBackend {
    client: OpenAIClient,
    model: String,
}

impl OpenAIBackend {
    /// Create a backend around an existing client.
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    ///
    /// A missing key is a fatal `SygilError::Config`, surfaced here at
    /// construction rather than per request.
    pub fn from_env() -> Result<Self> {
        let client = OpenAIClient::from_env().map_err(|e| SygilError::Config(Box::new(e)))?;
        Ok(Self::new(client))
    }

    /// Set the chat model (default: gpt-4o).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextBackend for OpenAIBackend {
    async fn respond(&self, request: BackendRequest) -> Result<BackendReply> {
        let api_request = ResponseRequest::new(&self.model)
            .message(InputMessage::developer(request.instructions))
            .message(InputMessage::user(request.user_content))
            .maybe_previous_response_id(request.previous_response_id);

        let response = self
            .client
            .create_response(api_request)
            .await
            .map_err(|e| match e {
                OpenAIError::Config(_) => SygilError::Config(Box::new(e)),
                _ => SygilError::Backend(Box::new(e)),
            })?;

        Ok(BackendReply {
            id: response.id,
            output_text: response.output_text,
        })
    }
}
