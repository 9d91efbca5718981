//! Typed errors for the engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling. Note what is *not* here:
//! parsing has no error variant. Model output that fails to parse
//! degrades to defaults inside the parser and never surfaces as a
//! failure.

use thiserror::Error;

/// Errors that can occur while generating a response.
#[derive(Debug, Error)]
pub enum SygilError {
    /// Configuration error (missing credentials, invalid settings).
    /// Raised once at backend construction, never per request.
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A backend call failed (network, API, or malformed transport
    /// response). Propagated opaquely; no partial result is returned.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SygilError>;
