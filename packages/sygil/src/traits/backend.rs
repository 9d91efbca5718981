//! Backend trait for text-completion calls.
//!
//! The engine never talks HTTP itself. It goes through this seam, which
//! abstracts a text-completion service that supports resuming a prior
//! exchange via an opaque continuation id. Implementations wrap a
//! specific provider (see `backends::OpenAIBackend`) or script replies
//! for tests (see `testing::ScriptedBackend`).

use async_trait::async_trait;

use crate::error::Result;

/// One backend invocation: fixed instructions plus the user turn.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    /// Developer/system instruction text for this call
    pub instructions: String,

    /// Content of the user turn
    pub user_content: String,

    /// Continuation id of a prior call to resume its conversation
    /// state. `None` starts fresh.
    pub previous_response_id: Option<String>,
}

/// What a backend call yields.
#[derive(Debug, Clone)]
pub struct BackendReply {
    /// Continuation id for this reply. Passing it as
    /// `previous_response_id` on a later call resumes this exchange.
    pub id: String,

    /// Raw output text, unparsed
    pub output_text: String,
}

/// A text-completion backend with conversation chaining.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Execute one completion call.
    ///
    /// Fails with `SygilError::Backend` on any transport or API
    /// failure; the engine performs no retries.
    async fn respond(&self, request: BackendRequest) -> Result<BackendReply>;
}
