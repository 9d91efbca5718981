//! The two-stage generation pipeline.
//!
//! - [`prompts`] - fixed instruction texts for both stages
//! - [`parse`] - pure parsers with layered fallback
//! - [`engine`] - the orchestrator driving both backend calls

pub mod engine;
pub mod parse;
pub mod prompts;

pub use engine::Engine;
pub use parse::{parse_fact_spine, parse_synthesis, SOURCES_MARKER};
