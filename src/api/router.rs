use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handler::{chat, health, languages, summarize, summarize_image, translate};
use crate::core::state::AppState;

/// Builds the application router. `max_upload_bytes` caps request bodies,
/// which matters for image uploads.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let state = Arc::new(state);

    let api = Router::new()
        .route("/summarize", post(summarize))
        .route("/summarize-image", post(summarize_image))
        .route("/chat", post(chat))
        .route("/translate", post(translate))
        .route("/languages", get(languages));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
