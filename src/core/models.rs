use serde::{Deserialize, Serialize};

/// Body of `POST /api/summarize`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub report_text: Option<String>,
}

/// Result of either summarize path. `original_text` is echoed back so the
/// browser can hold the conversation context itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub original_text: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub original_report: Option<String>,
    pub user_question: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text_to_translate: Option<String>,
    pub target_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// An uploaded report image, already buffered in memory.
#[derive(Debug, Clone)]
pub struct ReportImage {
    pub bytes: Vec<u8>,
    pub mime: String,
    pub file_name: Option<String>,
}

/// One candidate answer from the visual-question-answering API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VqaAnswer {
    pub answer: String,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Returns the value if it holds something other than whitespace.
#[must_use]
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_use_camel_case_fields() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"originalReport":"WBC 7.5","userQuestion":"What is WBC?"}"#,
        )
        .unwrap();
        assert_eq!(req.original_report.as_deref(), Some("WBC 7.5"));
        assert_eq!(req.user_question.as_deref(), Some("What is WBC?"));

        let req: TranslateRequest = serde_json::from_str(r#"{"targetLanguage":null}"#).unwrap();
        assert!(req.text_to_translate.is_none());
        assert!(req.target_language.is_none());
    }

    #[test]
    fn test_summary_result_serializes_original_text() {
        let result = SummaryResult {
            summary: "ok".into(),
            original_text: "GLUCOSE: 95".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["summary"], "ok");
        assert_eq!(json["originalText"], "GLUCOSE: 95");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("x".into())), Some("x".into()));
        assert_eq!(non_blank(Some("  \n".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
