use anyhow::{Result, anyhow, bail};
use serde_json::Value;

pub mod search;
pub mod wiki;

/// Dispatch a model-requested tool call. Unknown tools and missing
/// arguments are errors; the agent feeds them back to the model in-band.
pub async fn run_tool(client: &reqwest::Client, name: &str, args: &Value) -> Result<String> {
    match name {
        "search" => search::run(client, required_str(args, "query")?).await,
        "wiki" => wiki::run(client, required_str(args, "query")?).await,
        _ => bail!("unknown tool: {name}"),
    }
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("missing or invalid '{key}'"))
}
