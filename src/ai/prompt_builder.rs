//! Prompt templates and message assembly for every LLM call the API makes.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

pub const SUMMARY_TEMPERATURE: f32 = 0.5;
pub const CHAT_TEMPERATURE: f32 = 0.3;
pub const TRANSLATION_TEMPERATURE: f32 = 0.1;

pub const SUMMARY_FALLBACK: &str = "Could not generate a summary.";
pub const CHAT_FALLBACK: &str = "I am sorry, I could not find an answer.";
pub const TRANSLATION_FALLBACK: &str = "Translation failed.";

pub const CHAT_ACKNOWLEDGEMENT: &str = "I have read the report. How can I help you?";

pub const SUMMARIZE_SYSTEM_PROMPT: &str = r#"You are an expert, empathetic AI Medical Assistant. Your primary task is to transform a clinical medical report into a simplified, patient-friendly summary. You must be professional, reassuring, and strictly adhere to the instructions below.

**--- CORE DIRECTIVES ---**

1.  **Analyze and Normalize:**
    * Read the entire report to understand the context.
    * Convert all medical abbreviations into plain, full English terms (e.g., "WBC" becomes "White Blood Cell Count," "HDL" becomes "High-Density Lipoprotein").

2.  **Evaluate Each Parameter:**
    * For every test result with a numerical value, compare it to the provided reference range.
    * Clearly state if the result is **'Normal'**, **'High'**, or **'Low'**.
    * Briefly explain what each test measures in simple, non-technical language. For example: "Your White Blood Cell Count is a measure of the infection-fighting cells in your body."

**--- OUTPUT FORMATTING ---**

You **must** structure your response using Markdown with the following two sections:

**✅ In Healthy Range**
* Create a bulleted list here for all results that fall within their normal reference range.
* *Example:* `White Blood Cell Count: 7.5 x 10^9/L. This is in the normal range and shows your body has a healthy number of infection-fighting cells.`

**⚠️ Areas for Discussion with Your Doctor**
* Create a separate bulleted list here for all results that are marked as HIGH or LOW.
* *Example:* `Total Cholesterol: 215 mg/dL. This is slightly high and is something you may want to discuss with your doctor.`

**--- CONCLUDING NOTE ---**

* After the two sections, provide a short, positive, and encouraging general closing statement. Do not give specific advice.
* *Example:* "This summary is a tool to help you understand your results. Remember to always discuss your full report and any health concerns with your doctor. Staying informed is a great step in managing your health!"

**--- SPECIAL CASES ---**

* **If the report has NO numerical values** (e.g., it's a descriptive note from a radiologist), do not invent values. Instead, provide a simple, bulleted summary of the key findings described in the text. For example, if a report says "Lungs are clear," you can summarize it as: "The report indicates that your lungs appear to be clear."
* **If all parameters are normal**, only provide the "✅ In Healthy Range" section and conclude with a praise-filled positive note.

**--- CRITICAL SAFETY RULES (NON-NEGOTIABLE) ---**

1.  **ABSOLUTELY NO DIAGNOSIS:** Do not, under any circumstances, suggest a possible medical condition or diagnosis.
2.  **ABSOLUTELY NO MEDICAL ADVICE:** Do not recommend any treatments, medications, supplements, or specific lifestyle changes.
3.  **DO NOT SPECULATE:** If information is not explicitly in the report, state that it is not available. Do not infer or guess.
"#;

pub const CHAT_SYSTEM_PROMPT: &str = "You are a helpful medical assistant. \
    Your role is to answer follow-up questions about a medical report. \
    Use the provided medical report as the single source of truth. \
    Do NOT provide medical advice or diagnoses. \
    Keep your answers concise, simple, and easy for a patient to understand. \
    If the answer is not in the report, say \"That information is not available in the report.\"";

fn message(role: MessageRole, text: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(text),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

#[must_use]
pub fn translation_system_prompt(target_language: &str) -> String {
    format!(
        "You are an expert translator. Translate the following text into {target_language}. \
        Do not add any commentary or extra text. Only provide the direct translation."
    )
}

/// System prompt plus the report wrapped in a single user message.
#[must_use]
pub fn build_summary_prompt(report_text: &str) -> Vec<ChatCompletionMessage> {
    vec![
        message(MessageRole::system, SUMMARIZE_SYSTEM_PROMPT.to_string()),
        message(
            MessageRole::user,
            format!("Here is the medical report:\n\n{report_text}"),
        ),
    ]
}

/// Always exactly four messages: instructions, the fenced report, a canned
/// acknowledgement and the question. Nothing from earlier turns is included.
#[must_use]
pub fn build_chat_prompt(original_report: &str, user_question: &str) -> Vec<ChatCompletionMessage> {
    vec![
        message(MessageRole::system, CHAT_SYSTEM_PROMPT.to_string()),
        message(
            MessageRole::user,
            format!("Here is the medical report we are discussing:\n\n---\n{original_report}\n---"),
        ),
        message(MessageRole::assistant, CHAT_ACKNOWLEDGEMENT.to_string()),
        message(MessageRole::user, user_question.to_string()),
    ]
}

#[must_use]
pub fn build_translation_prompt(
    text_to_translate: &str,
    target_language: &str,
) -> Vec<ChatCompletionMessage> {
    vec![
        message(MessageRole::system, translation_system_prompt(target_language)),
        message(MessageRole::user, text_to_translate.to_string()),
    ]
}

/// Text body of a message, or `None` for non-text content.
#[must_use]
pub fn message_text(msg: &ChatCompletionMessage) -> Option<&str> {
    match &msg.content {
        Content::Text(text) => Some(text.as_str()),
        Content::ImageUrl(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_wraps_report() {
        let prompt = build_summary_prompt("GLUCOSE: 95 mg/dL (70-99)");

        assert_eq!(prompt.len(), 2);
        assert!(matches!(prompt[0].role, MessageRole::system));
        assert_eq!(message_text(&prompt[0]), Some(SUMMARIZE_SYSTEM_PROMPT));
        assert!(matches!(prompt[1].role, MessageRole::user));
        assert_eq!(
            message_text(&prompt[1]),
            Some("Here is the medical report:\n\nGLUCOSE: 95 mg/dL (70-99)")
        );
    }

    #[test]
    fn test_chat_prompt_has_fixed_shape() {
        let prompt = build_chat_prompt("WBC 7.5", "What is WBC?");

        assert_eq!(prompt.len(), 4);
        assert!(matches!(prompt[0].role, MessageRole::system));
        assert!(matches!(prompt[1].role, MessageRole::user));
        assert!(matches!(prompt[2].role, MessageRole::assistant));
        assert!(matches!(prompt[3].role, MessageRole::user));

        assert!(message_text(&prompt[1]).unwrap().contains("---\nWBC 7.5\n---"));
        assert_eq!(message_text(&prompt[2]), Some(CHAT_ACKNOWLEDGEMENT));
        assert_eq!(message_text(&prompt[3]), Some("What is WBC?"));
    }

    #[test]
    fn test_translation_prompt_names_target_language() {
        let prompt = build_translation_prompt("Hello", "French");

        assert_eq!(prompt.len(), 2);
        let system = message_text(&prompt[0]).unwrap();
        assert!(system.contains("into French."));
        assert!(system.contains("Only provide the direct translation."));
        assert_eq!(message_text(&prompt[1]), Some("Hello"));
    }
}
