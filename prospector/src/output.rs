use serde::{Deserialize, Serialize};
use serde_json::json;

/// Structured record the model is instructed to emit as its final answer.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResearchReport {
    pub topic: String,
    pub summary: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub tools_used: Vec<String>,
}

/// Instruction block embedded in the system prompt describing the wire
/// format of [`ResearchReport`].
#[must_use]
pub fn format_instructions() -> String {
    let schema = json!({
        "type": "object",
        "properties": {
            "topic": { "type": "string" },
            "summary": { "type": "string" },
            "sources": { "type": "array", "items": { "type": "string" } },
            "tools_used": { "type": "array", "items": { "type": "string" } },
        },
        "required": ["topic", "summary", "sources", "tools_used"],
    });

    format!(
        "The output must be a single JSON object that conforms to the schema below.\n\
         Do not wrap it in markdown fences and do not add any text before or after it.\n{}",
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    )
}

/// Strip incidental markdown fencing from a model's raw text output.
///
/// Input wrapped in a fenced code block loses the outer fence, and a `json`
/// language tag directly after the opening fence is dropped too. Anything
/// else passes through unchanged.
#[must_use]
pub fn clean_output(output: &str) -> String {
    if output.starts_with("```") && output.ends_with("```") {
        let mut cleaned = output.trim_matches('`').trim();
        if let Some(rest) = cleaned.strip_prefix("json\n") {
            cleaned = rest;
        }
        cleaned.to_string()
    } else {
        output.to_string()
    }
}

/// Coerce cleaned model text into the declared structure. A failure here is
/// the expected fallback path, not a fault: callers render the raw text
/// instead.
pub fn parse_report(text: &str) -> Result<ResearchReport, serde_json::Error> {
    serde_json::from_str(text)
}
