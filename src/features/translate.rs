use tracing::info;

use crate::ai::prompt_builder::{TRANSLATION_FALLBACK, TRANSLATION_TEMPERATURE, build_translation_prompt};
use crate::ai::{ChatCompleter, complete_or};
use crate::core::languages::resolve_language_name;
use crate::core::models::{TranslateRequest, TranslateResponse, non_blank};
use crate::errors::ReportError;

pub const MISSING_TRANSLATION_INPUT: &str = "Text and target language are required.";

/// Translate text into the requested language. A catalogue code such as
/// `"ta"` is expanded to its language name before prompting.
///
/// # Errors
///
/// Returns `ReportError::MissingInput` if either field is absent or blank, or
/// the LLM client's error if the completion fails.
pub async fn translate(
    llm: &dyn ChatCompleter,
    request: TranslateRequest,
) -> Result<TranslateResponse, ReportError> {
    let (Some(text_to_translate), Some(target_language)) = (
        non_blank(request.text_to_translate),
        non_blank(request.target_language),
    ) else {
        return Err(ReportError::MissingInput(
            MISSING_TRANSLATION_INPUT.to_string(),
        ));
    };

    let target_language = resolve_language_name(&target_language);
    info!(target_language = %target_language, "Translating text");

    let translated_text = complete_or(
        llm,
        build_translation_prompt(&text_to_translate, &target_language),
        TRANSLATION_TEMPERATURE,
        TRANSLATION_FALLBACK,
    )
    .await?;

    Ok(TranslateResponse { translated_text })
}
