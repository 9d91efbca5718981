//! Request, response, and intermediate types for one generation turn.
//!
//! Field names are part of the wire contract with callers and must stay
//! stable across serialization.

use serde::{Deserialize, Serialize};

/// A caller's question, plus the continuation id of an earlier turn if
/// the caller wants the conversation resumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The question to answer
    pub user_text: String,

    /// Continuation id echoed back from a previous `ChatResponse`.
    /// Opaque to us; only stored and forwarded to the backend.
    #[serde(default)]
    pub previous_response_id: Option<String>,
}

/// A cited reference from the fact stage.
///
/// `url` may be empty when the model knows the work but not a real URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// The four interpretive lenses, always all present.
///
/// On parse fallback each lens is an empty string rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lenses {
    #[serde(default)]
    pub physics: String,
    #[serde(default)]
    pub math: String,
    #[serde(default)]
    pub human: String,
    #[serde(default)]
    pub contemplative: String,
}

/// Confidence breakdown: short claims the model stands behind and
/// claims it flags as open or speculative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    #[serde(default)]
    pub confident: Vec<String>,
    #[serde(default)]
    pub uncertain: Vec<String>,
}

/// The assembled answer returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Continuation id of the *synthesis* call. Callers chain the next
    /// turn onto this, never onto the internal fact-stage id.
    pub response_id: String,

    /// Short synthesis paragraph shown first
    pub main_text: String,

    /// The four interpretive lenses
    pub lenses: Lenses,

    /// Confidence breakdown
    pub confidence: Confidence,

    /// Citations from the fact stage (may be empty)
    pub sources: Vec<Source>,
}

/// Intermediate output of the fact stage.
///
/// Lives only inside one `generate` call: produced by the first backend
/// call, folded into the second call's prompt, never returned directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactSpine {
    /// Grounded factual summary, plain text
    pub fact_text: String,

    /// Citations parsed from the trailing sources block
    pub sources: Vec<Source>,
}

/// Structured result of the synthesis stage, before citations from the
/// fact stage are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    pub main_text: String,
    pub lenses: Lenses,
    pub confidence: Confidence,
}
