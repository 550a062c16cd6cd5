use prospector::prompt::{PromptContext, PromptManager, default_context};

#[test]
fn test_render_system_fallback() {
    let pm = PromptManager::new().unwrap();
    let ctx = PromptContext {
        date: "2024-01-01".to_string(),
        format_instructions: "SCHEMA".to_string(),
    };
    let rendered = pm.render_system(&ctx).unwrap();
    // It should either use an on-disk template or fall back to the built-in prompt
    assert!(rendered.contains("research") || rendered.contains("SCHEMA"));
}

#[test]
fn test_default_context_embeds_format_instructions() {
    let ctx = default_context();
    assert!(ctx.format_instructions.contains("tools_used"));
    // YYYY-MM-DD
    assert_eq!(ctx.date.len(), 10);
    assert_eq!(ctx.date.matches('-').count(), 2);
}
