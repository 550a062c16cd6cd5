use crate::render::{Pages, ResultsView};
use actix_web::{Responder, get, post, web};
use prospector::agent::Agent;
use prospector::output::{clean_output, parse_report};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResearchForm {
    query: String,
}

#[get("/")]
pub async fn index(pages: web::Data<Pages>) -> impl Responder {
    pages.index(None)
}

#[post("/research")]
pub async fn research(
    form: web::Form<ResearchForm>,
    pages: web::Data<Pages>,
) -> impl Responder {
    if form.query.is_empty() {
        return pages.index(Some("Please enter a research topic"));
    }

    // Expected fallbacks (no output, parse failure) are handled as pages;
    // everything else lands in the generic catch below.
    match run_research(&form.query).await {
        Ok(ResearchPage::Form { error }) => pages.index(Some(&error)),
        Ok(ResearchPage::Results(view)) => pages.results(&view),
        Err(e) => pages.index(Some(&format!("Error: {e}"))),
    }
}

#[derive(Debug)]
enum ResearchPage {
    Form { error: String },
    Results(ResultsView),
}

async fn run_research(query: &str) -> anyhow::Result<ResearchPage> {
    let mut agent = Agent::from_env()?;
    let outcome = agent.run(query).await?;

    tracing::info!("research finished, tools used: {:?}", outcome.tools_used);

    let Some(raw) = outcome.output else {
        return Ok(ResearchPage::Form {
            error: "No output found in response".to_string(),
        });
    };

    let cleaned = clean_output(&raw);
    let view = match parse_report(&cleaned) {
        Ok(report) => ResultsView::structured(&report)?,
        Err(e) => ResultsView::raw(cleaned, &e),
    };

    Ok(ResearchPage::Results(view))
}
