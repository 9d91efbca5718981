// Main entry point for the Sygil API server

use anyhow::{Context, Result};
use openai_client::OpenAIClient;
use server_core::{build_app, Config};
use sygil::{backends::OpenAIBackend, Engine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sygil=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sygil API");

    // Load configuration; a missing API key is fatal here, not per request
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Wire the engine once; it is shared across all requests
    let backend = OpenAIBackend::new(OpenAIClient::new(config.openai_api_key)).with_model(config.model);
    let engine = Engine::new(backend);

    let app = build_app(engine, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
