use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Fixed per-process configuration for the hosted model. Read from the
/// environment when an agent is constructed, so a missing credential
/// surfaces as an error at call time rather than at startup.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AgentConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

impl AgentConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key: String = envmnt::get_or("GEMINI_API_KEY", "");
        if api_key.is_empty() {
            anyhow::bail!("GEMINI_API_KEY is not set");
        }

        Ok(Self {
            api_base: envmnt::get_or("RESEARCH_API_BASE", DEFAULT_API_BASE),
            api_key,
            model: envmnt::get_or("RESEARCH_MODEL", DEFAULT_MODEL),
            temperature: envmnt::get_or("RESEARCH_TEMPERATURE", "")
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
        })
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}
