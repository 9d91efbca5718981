//! Data types for the two-stage pipeline.

pub mod chat;

pub use chat::{
    ChatRequest, ChatResponse, Confidence, FactSpine, Lenses, Source, Synthesis,
};
