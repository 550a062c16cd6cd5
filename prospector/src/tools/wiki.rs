use anyhow::{Context, Result};
use serde_json::Value;

const API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";
// Single top result, tightly bounded extract: the encyclopedia lookup is a
// hint for the model, not a content source.
const TOP_RESULTS: &str = "1";
const EXTRACT_CHAR_BUDGET: usize = 100;

/// Bounded Wikipedia lookup: resolve the best-matching page title, then
/// return its plain-text extract truncated to the character budget.
pub async fn run(client: &reqwest::Client, query: &str) -> Result<String> {
    tracing::debug!("wiki lookup: {query}");

    let search: Value = client
        .get(API_ENDPOINT)
        .query(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", TOP_RESULTS),
            ("format", "json"),
        ])
        .send()
        .await
        .context("wiki search request failed")?
        .error_for_status()
        .context("wiki search returned an error status")?
        .json()
        .await
        .context("failed to decode wiki search response")?;

    let Some(title) = search["query"]["search"][0]["title"].as_str() else {
        return Ok(format!("No Wikipedia page found for: {query}"));
    };

    let page: Value = client
        .get(API_ENDPOINT)
        .query(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("explaintext", "1"),
            ("titles", title),
            ("format", "json"),
        ])
        .send()
        .await
        .context("wiki extract request failed")?
        .error_for_status()
        .context("wiki extract returned an error status")?
        .json()
        .await
        .context("failed to decode wiki extract response")?;

    Ok(summarize(title, &first_extract(&page).unwrap_or_default()))
}

// The extract reply keys pages by numeric id; take the first (only) one.
fn first_extract(page: &Value) -> Option<String> {
    page["query"]["pages"]
        .as_object()?
        .values()
        .next()?
        .get("extract")?
        .as_str()
        .map(str::to_string)
}

#[must_use]
pub fn summarize(title: &str, extract: &str) -> String {
    let bounded: String = extract.chars().take(EXTRACT_CHAR_BUDGET).collect();
    if bounded.is_empty() {
        format!("Page: {title}")
    } else {
        format!("Page: {title}\nSummary: {bounded}")
    }
}
