//! Medbrief - turns clinical medical reports into patient-friendly summaries.
//!
//! This crate implements a small HTTP JSON API in front of hosted models:
//! 1. Summarize a report submitted as text, or as a photographed/scanned image
//! 2. Answer follow-up questions about a report
//! 3. Translate a summary into another language
//!
//! # Architecture
//!
//! The system uses:
//! - axum for the HTTP surface
//! - An OpenAI-compatible chat-completion API (Groq by default) for all
//!   language work, with openai-api-rs message types
//! - A visual-question-answering API to check an image looks like a document
//! - Tesseract for OCR
//!
//! The server holds no per-user state. Every request carries everything it
//! needs, including the original report on every chat turn.
//!
//! # Example
//!
//! ```no_run
//! use medbrief::api::{AppState, router};
//! use medbrief::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     medbrief::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let state = AppState::from_config(&config)?;
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
//!     axum::serve(listener, router(state, config.max_upload_bytes)).await?;
//!
//!     Ok(())
//! }
//! ```
// Module declarations
pub mod ai;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod utils;

pub use errors::ReportError;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter and an `EnvFilter` that
/// honors `RUST_LOG` (defaulting to `info`). Calling it more than once is
/// harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// medbrief::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
