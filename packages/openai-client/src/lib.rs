//! Pure OpenAI REST API client
//!
//! A clean, minimal client for the OpenAI Responses API with no
//! domain-specific logic. Supports multi-turn conversation chaining via
//! `previous_response_id`.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::{OpenAIClient, ResponseRequest, InputMessage};
//!
//! let client = OpenAIClient::from_env()?;
//!
//! let first = client.create_response(
//!     ResponseRequest::new("gpt-4o")
//!         .message(InputMessage::developer("Answer concisely."))
//!         .message(InputMessage::user("Why is the sky blue?")),
//! ).await?;
//!
//! // Chain a follow-up onto the first response's conversation state.
//! let followup = client.create_response(
//!     ResponseRequest::new("gpt-4o")
//!         .message(InputMessage::user("And at sunset?"))
//!         .previous_response_id(first.id),
//! ).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| OpenAIError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a model response.
    ///
    /// Sends the request to the Responses API and returns the response
    /// id together with the concatenated output text. The returned id
    /// can be fed into a later request's `previous_response_id` to
    /// resume the same conversation server-side.
    pub async fn create_response(&self, request: ResponseRequest) -> Result<ModelResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/responses", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                OpenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(OpenAIError::Api(format!("OpenAI API error: {}", error_text)));
        }

        let raw: types::ResponseRaw = response
            .json()
            .await
            .map_err(|e| OpenAIError::Parse(e.to_string()))?;

        if !raw.has_message() {
            return Err(OpenAIError::Api("No message output from OpenAI".into()));
        }

        debug!(
            model = %request.model,
            response_id = %raw.id,
            duration_ms = start.elapsed().as_millis(),
            "OpenAI response created"
        );

        let output_text = raw.output_text();
        Ok(ModelResponse {
            id: raw.id,
            output_text,
            usage: raw.usage,
        })
    }
}
