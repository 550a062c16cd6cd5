use prospector::output::{ResearchReport, clean_output, format_instructions, parse_report};

#[test]
fn unfenced_output_is_unchanged() {
    assert_eq!(clean_output("plain text"), "plain text");
    assert_eq!(clean_output("{\"topic\":\"X\"}"), "{\"topic\":\"X\"}");
    // An unterminated fence is not a fence.
    assert_eq!(clean_output("```json\n{}"), "```json\n{}");
}

#[test]
fn fenced_output_loses_the_outer_fence() {
    assert_eq!(clean_output("```\n{\"a\":1}\n```"), "{\"a\":1}");
}

#[test]
fn json_language_tag_is_dropped() {
    assert_eq!(clean_output("```json\n{\"a\":1}\n```"), "{\"a\":1}");
}

#[test]
fn inner_backticks_survive_cleaning() {
    assert_eq!(clean_output("```\nuse `cargo`\n```"), "use `cargo`");
}

#[test]
fn parse_report_reads_all_fields() {
    let report = parse_report(
        r#"{"topic":"Iron","summary":"A metal.","sources":["wiki"],"tools_used":["search"]}"#,
    )
    .unwrap();
    assert_eq!(
        report,
        ResearchReport {
            topic: "Iron".to_string(),
            summary: "A metal.".to_string(),
            sources: vec!["wiki".to_string()],
            tools_used: vec!["search".to_string()],
        }
    );
}

#[test]
fn parse_report_defaults_missing_lists() {
    let report = parse_report(r#"{"topic":"Iron","summary":"A metal."}"#).unwrap();
    assert!(report.sources.is_empty());
    assert!(report.tools_used.is_empty());
}

#[test]
fn parse_report_rejects_non_conforming_text() {
    assert!(parse_report("The topic is iron.").is_err());
    assert!(parse_report(r#"{"summary":"missing topic"}"#).is_err());
}

#[test]
fn format_instructions_declare_the_schema_keys() {
    let instructions = format_instructions();
    for key in ["topic", "summary", "sources", "tools_used"] {
        assert!(instructions.contains(key), "missing key: {key}");
    }
    assert!(instructions.contains("JSON object"));
}
