//! Core trait abstractions.

pub mod backend;

pub use backend::{BackendReply, BackendRequest, TextBackend};
