//! Response types shared by the HTTP handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::errors::ReportError;

pub const INVALID_JSON_BODY: &str = "Invalid JSON body.";

/// Error returned to the browser as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Maps a domain error onto the two response tiers.
    ///
    /// Client-input errors keep their own message with a 400. Insufficient
    /// OCR text keeps its message but is a 500. Everything else is logged
    /// and replaced by `generic_message` so upstream detail never leaks.
    #[must_use]
    pub fn from_report_error(err: &ReportError, generic_message: &str) -> Self {
        if err.is_client_error() {
            warn!("Rejected request: {}", err);
            return Self::bad_request(err.to_string());
        }

        error!("Request failed: {}", err);
        let message = match err {
            ReportError::InsufficientText { .. } => err.public_message(),
            _ => None,
        };

        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.unwrap_or_else(|| generic_message.to_string()),
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.message }))).into_response()
    }
}
