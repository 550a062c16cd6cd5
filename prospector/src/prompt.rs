use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;
use std::fmt;

pub const DEFAULT_SYSTEM_PROMPT: &str = r"
You are a research assistant that will help generate a research paper.
Today's date is {{ date }}.
Answer the user query and use the necessary tools.
Wrap the output in this format and provide no other text:
{{ format_instructions }}
";

pub struct PromptManager {
    env: Environment<'static>,
}

impl fmt::Debug for PromptManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptManager").finish()
    }
}

#[derive(Serialize, Debug)]
pub struct PromptContext {
    pub date: String,
    pub format_instructions: String,
}

impl PromptManager {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        let prompts_dir = std::env::current_dir()
            .context("Failed to get current directory")?
            .join(".prospector")
            .join("prompts");

        if prompts_dir.exists() {
            env.set_loader(minijinja::path_loader(prompts_dir));
        }

        Ok(Self { env })
    }

    pub fn render_system(&self, ctx: &PromptContext) -> Result<String> {
        self.render("system.md", ctx)
            .or_else(|_| self.render_default(ctx))
    }

    fn render(&self, template_name: &str, ctx: &PromptContext) -> Result<String> {
        let tmpl = self
            .env
            .get_template(template_name)
            .context(format!("Template {template_name} not found"))?;

        tmpl.render(context!(
            date => ctx.date,
            format_instructions => ctx.format_instructions,
        ))
        .context(format!("Failed to render template {template_name}"))
    }

    fn render_default(&self, ctx: &PromptContext) -> Result<String> {
        self.env
            .render_str(
                DEFAULT_SYSTEM_PROMPT,
                context!(
                    date => ctx.date,
                    format_instructions => ctx.format_instructions,
                ),
            )
            .context("Failed to render built-in system prompt")
    }
}

#[must_use]
pub fn default_context() -> PromptContext {
    PromptContext {
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        format_instructions: crate::output::format_instructions(),
    }
}
