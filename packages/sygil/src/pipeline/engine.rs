//! The Engine - main entry point for the answer pipeline.
//!
//! One `generate` call drives two strictly sequential backend calls:
//! the fact stage produces a grounded summary with citations, and the
//! synthesis stage turns that summary into four interpretive lenses
//! plus a confidence breakdown. The synthesis call is always chained to
//! the fact call's continuation id, so the model keeps the full context
//! of the fact exchange without us re-sending it verbatim.

use tracing::debug;

use crate::error::Result;
use crate::pipeline::parse::{parse_fact_spine, parse_synthesis};
use crate::pipeline::prompts::{synthesis_prompt, synthesis_user_turn, FACT_SPINE_PROMPT};
use crate::traits::{BackendRequest, TextBackend};
use crate::types::ChatResponse;

/// The answer engine, generic over its text backend.
///
/// Construct once with an injected backend and reuse across requests;
/// the engine holds no per-request state.
///
/// # Example
///
/// ```rust,ignore
/// let backend = OpenAIBackend::from_env()?;
/// let engine = Engine::new(backend);
///
/// let answer = engine.generate("Why is the sky blue?", None).await?;
/// // Chain the next turn onto this one:
/// let followup = engine
///     .generate("And at sunset?", Some(&answer.response_id))
///     .await?;
/// ```
pub struct Engine<B: TextBackend> {
    backend: B,
}

impl<B: TextBackend> Engine<B> {
    /// Create a new engine around the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a reference to the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Answer a question.
    ///
    /// `previous_response_id` is the continuation id a caller got back
    /// from an earlier turn; `None` starts a fresh conversation. The
    /// returned `response_id` is always the synthesis call's id, never
    /// the internal fact-stage id.
    ///
    /// Fails with `SygilError::Backend` if either backend call fails.
    /// Parsing problems never fail: they degrade to defaults inside the
    /// parsers.
    pub async fn generate(
        &self,
        user_text: &str,
        previous_response_id: Option<&str>,
    ) -> Result<ChatResponse> {
        // Stage one: fact spine. Resumes the caller's conversation when
        // a continuation id was supplied.
        let fact_reply = self
            .backend
            .respond(BackendRequest {
                instructions: FACT_SPINE_PROMPT.to_string(),
                user_content: user_text.to_string(),
                previous_response_id: previous_response_id.map(str::to_string),
            })
            .await?;

        let spine = parse_fact_spine(&fact_reply.output_text);
        debug!(
            fact_response_id = %fact_reply.id,
            source_count = spine.sources.len(),
            "fact stage complete"
        );

        // Stage two: synthesis, always chained to the fact stage. The
        // fact-stage id is discarded after this; callers only ever see
        // the synthesis id.
        let synth_reply = self
            .backend
            .respond(BackendRequest {
                instructions: synthesis_prompt(),
                user_content: synthesis_user_turn(user_text, &spine.fact_text),
                previous_response_id: Some(fact_reply.id),
            })
            .await?;

        let synthesis = parse_synthesis(&synth_reply.output_text);
        debug!(response_id = %synth_reply.id, "synthesis stage complete");

        Ok(ChatResponse {
            response_id: synth_reply.id,
            main_text: synthesis.main_text,
            lenses: synthesis.lenses,
            confidence: synthesis.confidence,
            sources: spine.sources,
        })
    }
}
