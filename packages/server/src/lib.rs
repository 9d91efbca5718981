//! HTTP transport for the Sygil engine.
//!
//! A thin layer: one chat route, a health check, CORS, and request
//! tracing. All generation logic lives in the `sygil` crate.

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;
