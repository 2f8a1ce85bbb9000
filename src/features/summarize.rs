use tracing::{info, warn};

use crate::ai::complete_or;
use crate::ai::prompt_builder::{SUMMARY_FALLBACK, SUMMARY_TEMPERATURE, build_summary_prompt};
use crate::ai::ChatCompleter;
use crate::clients::DOCUMENT_QUESTION;
use crate::clients::ocr::meaningful_chars;
use crate::core::models::{ReportImage, SummarizeRequest, SummaryResult, non_blank};
use crate::core::state::AppState;
use crate::errors::ReportError;
use crate::utils::mime::is_supported_image_mime;

pub const MISSING_REPORT_TEXT: &str = "Report text is required.";
pub const MISSING_REPORT_IMAGE: &str = "No image file uploaded.";
pub const UNSUPPORTED_IMAGE: &str = "Unsupported image type.";

/// Summarize a report submitted as text.
///
/// # Errors
///
/// Returns `ReportError::MissingInput` for an absent or blank report, or the
/// LLM client's error if the completion fails.
pub async fn summarize_text(
    llm: &dyn ChatCompleter,
    request: SummarizeRequest,
) -> Result<SummaryResult, ReportError> {
    let report_text = non_blank(request.report_text)
        .ok_or_else(|| ReportError::MissingInput(MISSING_REPORT_TEXT.to_string()))?;

    summarize_report(llm, report_text).await
}

/// Generate a summary and echo the report text back alongside it.
///
/// # Errors
///
/// Propagates the LLM client's error.
pub async fn summarize_report(
    llm: &dyn ChatCompleter,
    report_text: String,
) -> Result<SummaryResult, ReportError> {
    let summary = complete_or(
        llm,
        build_summary_prompt(&report_text),
        SUMMARY_TEMPERATURE,
        SUMMARY_FALLBACK,
    )
    .await?;

    Ok(SummaryResult {
        summary,
        original_text: report_text,
    })
}

/// Summarize a photographed or scanned report.
///
/// Each stage can end the request early: the document check must pass (or
/// fail open), OCR must return enough text, and only then is the LLM called.
///
/// # Errors
///
/// - `MissingInput` / `InvalidInput` when there is no usable upload
/// - `NotAReport` when the classifier rejects the image
/// - `InsufficientText` when OCR finds too little text
/// - upstream errors from the classifier (fail-closed only), OCR or LLM
#[tracing::instrument(level = "info", skip_all)]
pub async fn summarize_image(
    state: &AppState,
    image: Option<ReportImage>,
) -> Result<SummaryResult, ReportError> {
    let image = image
        .filter(|img| !img.bytes.is_empty())
        .ok_or_else(|| ReportError::MissingInput(MISSING_REPORT_IMAGE.to_string()))?;

    if !is_supported_image_mime(&image.mime) {
        warn!(mime = %image.mime, "Rejected upload with unsupported MIME type");
        return Err(ReportError::InvalidInput(UNSUPPORTED_IMAGE.to_string()));
    }

    info!(
        mime = %image.mime,
        bytes = image.bytes.len(),
        file_name = image.file_name.as_deref().unwrap_or(""),
        "Processing report image"
    );

    let settings = state.settings();

    let outcome = state.classifier().classify(&image.bytes, DOCUMENT_QUESTION).await;
    settings.policy.evaluate(outcome)?;

    let text = state
        .ocr()
        .recognize(&image.bytes, &settings.ocr_language)
        .await?;

    let extracted_chars = meaningful_chars(&text);
    if extracted_chars < settings.ocr_min_chars {
        warn!(
            extracted_chars,
            required = settings.ocr_min_chars,
            "OCR produced too little text"
        );
        return Err(ReportError::InsufficientText {
            extracted_chars,
            required: settings.ocr_min_chars,
        });
    }

    summarize_report(state.llm(), text).await
}
