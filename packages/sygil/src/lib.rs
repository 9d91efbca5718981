//! Sygil - a two-stage multi-perspective answer engine
//!
//! Answers a question by orchestrating two sequential calls to a
//! text-completion backend:
//!
//! 1. **Fact stage** - a grounded factual summary with citations,
//!    emitted as plain text plus a trailing `---SOURCES---` JSON block.
//! 2. **Synthesis stage** - four labeled interpretive lenses (physics,
//!    math, human, contemplative), a short main text, and a confidence
//!    breakdown, requested as strict JSON and parsed defensively.
//!
//! The synthesis call is chained to the fact call's continuation id, so
//! the second stage sees the full fact exchange without re-sending it.
//! The model is treated as unreliable: every parsing path degrades to a
//! safe default instead of failing, while backend/transport failures
//! propagate as a single opaque error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sygil::{backends::OpenAIBackend, Engine};
//!
//! let engine = Engine::new(OpenAIBackend::from_env()?);
//! let answer = engine.generate("Why is the sky blue?", None).await?;
//!
//! println!("{}", answer.main_text);
//! // Pass answer.response_id back in to continue the conversation.
//! ```
//!
//! # Modules
//!
//! - [`traits`] - the `TextBackend` seam to the completion service
//! - [`types`] - request/response data model
//! - [`pipeline`] - prompts, parsers, and the orchestrating engine
//! - [`testing`] - scripted backend for tests
//! - `backends` - provider implementations (feature `openai`)

pub mod error;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod backends;

// Re-export core types at crate root
pub use error::{Result, SygilError};
pub use pipeline::Engine;
pub use traits::{BackendReply, BackendRequest, TextBackend};
pub use types::{ChatRequest, ChatResponse, Confidence, FactSpine, Lenses, Source, Synthesis};
