use tracing::info;

use crate::ai::prompt_builder::{CHAT_FALLBACK, CHAT_TEMPERATURE, build_chat_prompt};
use crate::ai::{ChatCompleter, complete_or};
use crate::core::models::{ChatRequest, ChatResponse, non_blank};
use crate::errors::ReportError;

pub const MISSING_CHAT_INPUT: &str = "Original report and user question are required.";

/// Answer one follow-up question about a report.
///
/// The caller resupplies the report on every turn; no history is kept here.
///
/// # Errors
///
/// Returns `ReportError::MissingInput` if either field is absent or blank, or
/// the LLM client's error if the completion fails.
pub async fn answer_question(
    llm: &dyn ChatCompleter,
    request: ChatRequest,
) -> Result<ChatResponse, ReportError> {
    let (Some(original_report), Some(user_question)) = (
        non_blank(request.original_report),
        non_blank(request.user_question),
    ) else {
        return Err(ReportError::MissingInput(MISSING_CHAT_INPUT.to_string()));
    };

    info!(
        report_chars = original_report.chars().count(),
        question_chars = user_question.chars().count(),
        "Answering follow-up question"
    );

    let answer = complete_or(
        llm,
        build_chat_prompt(&original_report, &user_question),
        CHAT_TEMPERATURE,
        CHAT_FALLBACK,
    )
    .await?;

    Ok(ChatResponse { answer })
}
