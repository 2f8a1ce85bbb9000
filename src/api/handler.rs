//! HTTP handlers - thin adapters between axum and the report operations.
//!
//! Each handler:
//! - Extracts the body (JSON or multipart)
//! - Delegates to `crate::features`
//! - Shapes the JSON response or collapses the error into its tier

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State, rejection::JsonRejection, multipart::MultipartRejection},
};
use tracing::{info, warn};

use super::helpers::{ApiError, INVALID_JSON_BODY};
use super::parsing::read_report_image;
use crate::core::languages::{Language, SUPPORTED_LANGUAGES};
use crate::core::models::{
    ChatRequest, ChatResponse, HealthResponse, SummarizeRequest, SummaryResult, TranslateRequest,
    TranslateResponse,
};
use crate::core::state::AppState;
use crate::features;

pub const SUMMARIZE_FAILED: &str = "Failed to generate summary.";
pub const SUMMARIZE_IMAGE_FAILED: &str = "Failed to process the image.";
pub const CHAT_FAILED: &str = "Failed to get a chat response.";
pub const TRANSLATE_FAILED: &str = "Failed to translate the text.";

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!("Invalid JSON body: {}", rejection.body_text());
        ApiError::bad_request(INVALID_JSON_BODY)
    })
}

/// `POST /api/summarize`
#[tracing::instrument(level = "info", skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummaryResult>, ApiError> {
    let request = json_body(payload)?;

    let result = features::summarize_text(state.llm(), request)
        .await
        .map_err(|e| ApiError::from_report_error(&e, SUMMARIZE_FAILED))?;

    info!("Summary generated from text");
    Ok(Json(result))
}

/// `POST /api/summarize-image`
#[tracing::instrument(level = "info", skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn summarize_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResult>, ApiError> {
    // A request that is not multipart at all simply has no file.
    let image = match multipart {
        Ok(mut multipart) => read_report_image(&mut multipart).await?,
        Err(rejection) => {
            warn!("Not a multipart request: {}", rejection.body_text());
            None
        }
    };

    let result = features::summarize_image(&state, image)
        .await
        .map_err(|e| ApiError::from_report_error(&e, SUMMARIZE_IMAGE_FAILED))?;

    info!("Summary generated from image");
    Ok(Json(result))
}

/// `POST /api/chat`
#[tracing::instrument(level = "info", skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = json_body(payload)?;

    let response = features::answer_question(state.llm(), request)
        .await
        .map_err(|e| ApiError::from_report_error(&e, CHAT_FAILED))?;

    Ok(Json(response))
}

/// `POST /api/translate`
#[tracing::instrument(level = "info", skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = json_body(payload)?;

    let response = features::translate(state.llm(), request)
        .await
        .map_err(|e| ApiError::from_report_error(&e, TRANSLATE_FAILED))?;

    Ok(Json(response))
}

/// `GET /api/languages`
pub async fn languages() -> Json<&'static [Language]> {
    Json(SUPPORTED_LANGUAGES)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
