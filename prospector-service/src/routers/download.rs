use crate::document::{DOCX_MIME, ReportData, ReportFields, attachment_filename, build_document};
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    topic: Option<String>,
    summary: Option<String>,
    /// Pipe-delimited list; empty segments are discarded.
    sources: Option<String>,
}

#[get("/download")]
pub async fn handle(query: web::Query<DownloadQuery>) -> actix_web::Result<HttpResponse> {
    let query = query.into_inner();

    let topic = query.topic.unwrap_or_else(|| "Research Topic".to_string());
    let summary = query
        .summary
        .unwrap_or_else(|| "No summary available".to_string());
    let sources: Vec<String> = query
        .sources
        .as_deref()
        .unwrap_or_default()
        .split('|')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    let data = ReportData::Fields(ReportFields {
        topic: topic.clone(),
        summary,
        sources,
    });

    let bytes =
        build_document(&data.resolve()).map_err(actix_web::error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok()
        .content_type(DOCX_MIME)
        .append_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", attachment_filename(&topic)),
        ))
        .body(bytes))
}
