use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use minijinja::{Environment, context};
use prospector::output::ResearchReport;
use serde::Serialize;
use std::fmt;

/// Everything the results template needs, resolved before rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub topic: String,
    pub summary: String,
    pub sources: Vec<String>,
    pub tools_used: Vec<String>,
    pub raw_response: String,
    pub sources_param: String,
    pub error: Option<String>,
}

impl ResultsView {
    pub fn structured(report: &ResearchReport) -> anyhow::Result<Self> {
        Ok(Self {
            topic: report.topic.clone(),
            summary: report.summary.clone(),
            sources: report.sources.clone(),
            tools_used: report.tools_used.clone(),
            raw_response: serde_json::to_string_pretty(report)?,
            sources_param: report.sources.join("|"),
            error: None,
        })
    }

    /// Fallback view when the model's text did not parse: the raw cleaned
    /// text stands in for the summary, with an inline note.
    #[must_use]
    pub fn raw(cleaned: String, parse_error: &serde_json::Error) -> Self {
        Self {
            topic: "Research Results".to_string(),
            summary: cleaned.clone(),
            sources: Vec::new(),
            tools_used: Vec::new(),
            raw_response: cleaned,
            sources_param: String::new(),
            error: Some(format!("Error parsing results: {parse_error}")),
        }
    }
}

/// Page templates, built once at process start and shared read-only across
/// workers via `web::Data`.
pub struct Pages {
    env: Environment<'static>,
}

impl fmt::Debug for Pages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pages").finish()
    }
}

impl Default for Pages {
    fn default() -> Self {
        Self::new()
    }
}

impl Pages {
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        load_embedded_templates(&mut env);
        Self { env }
    }

    #[must_use]
    pub fn index(&self, error: Option<&str>) -> HttpResponse {
        self.render("index.html", context!(error => error))
    }

    #[must_use]
    pub fn results(&self, view: &ResultsView) -> HttpResponse {
        self.render("results.html", minijinja::Value::from_serialize(view))
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> HttpResponse {
        let Ok(tmpl) = self.env.get_template(name) else {
            return HttpResponse::InternalServerError().finish();
        };

        match tmpl.render(ctx) {
            Ok(body) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(body),
            Err(e) => {
                tracing::error!("failed to render {name}: {e}");
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}

fn load_embedded_templates(env: &mut Environment<'_>) {
    macro_rules! tpl {
        ($n:expr) => {
            env.add_template($n, include_str!(concat!("templates/", $n)))
                .unwrap()
        };
    }
    tpl!("index.html");
    tpl!("results.html");
}
