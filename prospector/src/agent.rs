use crate::config::AgentConfig;
use crate::prompt::{PromptManager, default_context};
use crate::tools::run_tool;
use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde_json::{Value, json};
use std::sync::LazyLock;

static TOOLS_JSON: LazyLock<Vec<Value>> = LazyLock::new(|| {
    let s = include_str!("../config/tools.json");
    serde_json::from_str(s).expect("Invalid tools.json")
});

const MAX_TOOL_ROUNDS: usize = 12;

/// A per-request composition of model handle, prompt, tool set and message
/// transcript. Constructed fresh for every research request and discarded
/// with it; holds no cross-request state.
#[derive(Debug)]
pub struct Agent {
    client: Client,
    messages: Vec<Value>,
    config: AgentConfig,
}

/// What a single agent run yields: the model's final text (absent when the
/// reply carried no content) and the tools it actually invoked.
#[derive(Debug, Clone, Default)]
pub struct ResearchOutcome {
    pub output: Option<String>,
    pub tools_used: Vec<String>,
}

impl Agent {
    pub fn from_env() -> Result<Self> {
        Self::with_config(AgentConfig::from_env()?)
    }

    pub fn with_config(config: AgentConfig) -> Result<Self> {
        let prompt_manager = PromptManager::new()?;
        let system_prompt = prompt_manager.render_system(&default_context())?;

        Ok(Self {
            client: Client::new(),
            messages: vec![json!({ "role": "system", "content": system_prompt })],
            config,
        })
    }

    /// Run the tool-calling loop until the model produces a final answer.
    pub async fn run(&mut self, query: &str) -> Result<ResearchOutcome> {
        self.messages.push(json!({ "role": "user", "content": query }));

        let mut tools_used = Vec::new();

        for _ in 0..MAX_TOOL_ROUNDS {
            let message = self.request_completion().await?;

            let tool_calls = message["tool_calls"]
                .as_array()
                .filter(|calls| !calls.is_empty())
                .cloned();

            let Some(tool_calls) = tool_calls else {
                let output = message["content"].as_str().map(str::to_string);
                self.messages
                    .push(json!({ "role": "assistant", "content": message["content"].clone() }));
                return Ok(ResearchOutcome { output, tools_used });
            };

            self.messages.push(json!({
                "role": "assistant",
                "content": message["content"].clone(),
                "tool_calls": tool_calls,
            }));

            self.handle_tool_calls(&tool_calls, &mut tools_used).await;
        }

        Err(anyhow!(
            "research stopped: tool-call loop exceeded {MAX_TOOL_ROUNDS} rounds"
        ))
    }

    async fn request_completion(&self) -> Result<Value> {
        let body = json!({
            "model": self.config.model,
            "messages": &self.messages,
            "tools": &*TOOLS_JSON,
            "tool_choice": "auto",
            "temperature": self.config.temperature,
        });

        let resp = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .context("model request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "(no response body)".to_string());
            return Err(anyhow!(
                "model endpoint returned {status}: {}",
                error_body.chars().take(500).collect::<String>()
            ));
        }

        let reply: Value = resp
            .json()
            .await
            .context("failed to decode model response")?;

        Ok(reply["choices"][0]["message"].clone())
    }

    async fn handle_tool_calls(&mut self, tool_calls: &[Value], tools_used: &mut Vec<String>) {
        for call in tool_calls {
            let id = call["id"].as_str().unwrap_or("");
            let name = call["function"]["name"].as_str().unwrap_or("");
            let args_raw = call["function"]["arguments"].as_str().unwrap_or("{}");
            let args: Value = serde_json::from_str(args_raw).unwrap_or_else(|_| json!({}));

            tracing::debug!("tool call: {name} {args}");

            // Tool failures go back to the model in-band so it can recover.
            let result = match run_tool(&self.client, name, &args).await {
                Ok(output) => output,
                Err(e) => format!("Tool error: {e}"),
            };

            if !tools_used.iter().any(|used| used == name) {
                tools_used.push(name.to_string());
            }

            self.messages.push(json!({
                "role": "tool",
                "tool_call_id": id,
                "content": result,
            }));
        }
    }
}
