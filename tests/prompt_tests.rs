use medbrief::ai::prompt_builder::{
    CHAT_SYSTEM_PROMPT, SUMMARIZE_SYSTEM_PROMPT, build_chat_prompt, build_summary_prompt,
    build_translation_prompt, message_text,
};

#[test]
fn test_summarize_prompt_keeps_safety_rules() {
    assert!(SUMMARIZE_SYSTEM_PROMPT.contains("ABSOLUTELY NO DIAGNOSIS"));
    assert!(SUMMARIZE_SYSTEM_PROMPT.contains("ABSOLUTELY NO MEDICAL ADVICE"));
    assert!(SUMMARIZE_SYSTEM_PROMPT.contains("✅ In Healthy Range"));
    assert!(SUMMARIZE_SYSTEM_PROMPT.contains("⚠️ Areas for Discussion with Your Doctor"));
}

#[test]
fn test_chat_prompt_restricts_to_report() {
    assert!(CHAT_SYSTEM_PROMPT.contains("single source of truth"));
    assert!(CHAT_SYSTEM_PROMPT.contains("That information is not available in the report."));
}

#[test]
fn test_report_text_is_embedded_verbatim() {
    let report = "Lungs are clear.\nNo acute findings.\n{{not a template}}";

    let summary = build_summary_prompt(report);
    assert!(message_text(&summary[1]).unwrap().ends_with(report));

    let chat = build_chat_prompt(report, "Is this bad?");
    assert!(message_text(&chat[1]).unwrap().contains(report));
}

#[test]
fn test_translation_text_is_sent_unchanged() {
    let text = "**✅ In Healthy Range**\n* Glucose: 95 mg/dL";
    let prompt = build_translation_prompt(text, "Hindi");

    assert_eq!(message_text(&prompt[1]), Some(text));
    assert!(message_text(&prompt[0]).unwrap().contains("into Hindi."));
}
