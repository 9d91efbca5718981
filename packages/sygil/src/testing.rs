//! Testing utilities including a scripted backend.
//!
//! Useful for testing applications that use the engine without making
//! real model or network calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{Result, SygilError};
use crate::traits::{BackendReply, BackendRequest, TextBackend};

/// A scripted backend for testing.
///
/// Replies are queued up front and handed out in order; every incoming
/// request is recorded for assertions. Clones share the same script and
/// call log, so tests can keep a handle while the engine owns another.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    replies: Arc<Mutex<VecDeque<BackendReply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Record of a call made to the scripted backend.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub instructions: String,
    pub user_content: String,
    pub previous_response_id: Option<String>,
}

impl ScriptedBackend {
    /// Create a new scripted backend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply.
    pub fn with_reply(self, id: impl Into<String>, output_text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(BackendReply {
            id: id.into(),
            output_text: output_text.into(),
        });
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextBackend for ScriptedBackend {
    async fn respond(&self, request: BackendRequest) -> Result<BackendReply> {
        self.calls.lock().unwrap().push(RecordedCall {
            instructions: request.instructions,
            user_content: request.user_content,
            previous_response_id: request.previous_response_id,
        });

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SygilError::Backend("scripted backend exhausted".into()))
    }
}
