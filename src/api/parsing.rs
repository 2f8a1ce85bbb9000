//! Request body extraction helpers.

use axum::extract::Multipart;
use axum::http::StatusCode;
use tracing::{debug, warn};

use super::helpers::ApiError;
use crate::core::models::ReportImage;
use crate::utils::mime::resolve_upload_mime;

/// Multipart field that carries the report image.
pub const REPORT_IMAGE_FIELD: &str = "reportImage";

pub const UPLOAD_TOO_LARGE: &str = "Uploaded file is too large.";
pub const INVALID_UPLOAD: &str = "Could not read the uploaded file.";

/// Buffers the `reportImage` field of a multipart body.
///
/// Other fields are skipped. Returns `Ok(None)` when no such field exists.
///
/// # Errors
///
/// Returns a 413 when the body exceeds the configured limit and a 400 for any
/// other malformed multipart input.
pub async fn read_report_image(multipart: &mut Multipart) -> Result<Option<ReportImage>, ApiError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => return Err(multipart_error(e.status(), &e.body_text())),
        };

        if field.name() != Some(REPORT_IMAGE_FIELD) {
            debug!(field = ?field.name(), "Skipping unexpected multipart field");
            continue;
        }

        let file_name = field.file_name().map(ToString::to_string);
        let mime = resolve_upload_mime(field.content_type(), file_name.as_deref());

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e.status(), &e.body_text()))?;

        return Ok(Some(ReportImage {
            bytes: bytes.to_vec(),
            mime,
            file_name,
        }));
    }
}

fn multipart_error(status: StatusCode, detail: &str) -> ApiError {
    warn!(%status, "Failed to read multipart body: {}", detail);
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, UPLOAD_TOO_LARGE)
    } else {
        ApiError::bad_request(INVALID_UPLOAD)
    }
}
