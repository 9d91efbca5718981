//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use sygil::{Engine, TextBackend};

use crate::routes::{chat_handler, health_handler};

/// Shared application state
pub struct AppState<B: TextBackend> {
    pub engine: Arc<Engine<B>>,
}

impl<B: TextBackend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

/// Build the Axum application router.
///
/// The engine is constructed once by the caller and shared across all
/// in-flight requests; it holds no per-request state.
pub fn build_app<B: TextBackend + 'static>(
    engine: Engine<B>,
    allowed_origins: &[String],
) -> Router {
    let state = AppState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/chat", post(chat_handler::<B>))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(build_cors(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// CORS from the configured origin list; "*" opens it up for local dev.
fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}
