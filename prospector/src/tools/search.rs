use anyhow::{Context, Result};
use scraper::{Html, Selector};

// The HTML endpoint keeps a stable structure and needs no API key.
const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Generic web search. Returns the top hits as plain text for the model.
pub async fn run(client: &reqwest::Client, query: &str) -> Result<String> {
    tracing::debug!("web search: {query}");

    let html = client
        .get(SEARCH_ENDPOINT)
        .query(&[("q", query)])
        .send()
        .await
        .context("search request failed")?
        .error_for_status()
        .context("search returned an error status")?
        .text()
        .await
        .context("failed to read search response")?;

    let hits = parse_results(&html, MAX_RESULTS);
    if hits.is_empty() {
        return Ok(format!("No results found for: {query}"));
    }

    Ok(render_hits(&hits))
}

/// Extract result links from a DuckDuckGo HTML page.
#[must_use]
pub fn parse_results(html: &str, max: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);

    let (Ok(result_sel), Ok(link_sel), Ok(snippet_sel)) = (
        Selector::parse("div.result"),
        Selector::parse("a.result__a"),
        Selector::parse(".result__snippet"),
    ) else {
        return Vec::new();
    };

    let mut hits = Vec::new();

    for result in document.select(&result_sel) {
        if hits.len() >= max {
            break;
        }

        let Some(link) = result.select(&link_sel).next() else {
            continue;
        };

        let title = link.text().collect::<String>().trim().to_string();
        let Some(url) = link.value().attr("href").and_then(resolve_result_url) else {
            continue;
        };
        if title.is_empty() {
            continue;
        }

        let snippet = result
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        hits.push(SearchHit {
            title,
            url,
            snippet,
        });
    }

    hits
}

// DuckDuckGo wraps hits in redirect links of the form
// //duckduckgo.com/l/?uddg=<encoded-url>&...; unwrap them to the real URL.
fn resolve_result_url(href: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    let start = href.find("uddg=")? + 5;
    let encoded = href[start..].split('&').next()?;
    let decoded = urlencoding::decode(encoded).ok()?;

    decoded.starts_with("http").then(|| decoded.into_owned())
}

fn render_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| {
            if hit.snippet.is_empty() {
                format!("Title: {}\nURL: {}", hit.title, hit.url)
            } else {
                format!("Title: {}\nURL: {}\nSnippet: {}", hit.title, hit.url, hit.snippet)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
