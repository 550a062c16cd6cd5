use anyhow::Result;
use docx_rs::{
    AbstractNumbering, Docx, Footer, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, Start, Style, StyleType,
};
use serde::Deserialize;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const BULLET_NUMBERING: usize = 1;

/// Document-builder input, resolved once at the boundary: either free text
/// (possibly JSON smuggled in a string) or already-separated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportData {
    Raw(String),
    Fields(ReportFields),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFields {
    pub topic: String,
    pub summary: String,
    pub sources: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PartialFields {
    topic: Option<String>,
    summary: Option<String>,
    sources: Option<Vec<String>>,
}

impl ReportData {
    /// Classify free text: a JSON object becomes `Fields` (absent keys get
    /// defaults), anything else stays `Raw`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<PartialFields>(text) {
            Ok(fields) => Self::Fields(ReportFields {
                topic: fields.topic.unwrap_or_else(|| "Unknown Topic".to_string()),
                summary: fields
                    .summary
                    .unwrap_or_else(|| "No summary available".to_string()),
                sources: fields.sources.unwrap_or_default(),
            }),
            Err(_) => Self::Raw(text.to_string()),
        }
    }

    #[must_use]
    pub fn resolve(self) -> ReportFields {
        match self {
            Self::Fields(fields) => fields,
            Self::Raw(text) => ReportFields {
                topic: "Research Topic".to_string(),
                summary: text,
                sources: Vec::new(),
            },
        }
    }
}

#[must_use]
pub fn attachment_filename(topic: &str) -> String {
    format!("research_{}.docx", topic.replace(' ', "_"))
}

/// Assemble the document tree: title, executive summary, optional bulleted
/// sources section and a dated footer.
#[must_use]
pub fn compose(fields: &ReportFields) -> Docx {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "Title", 56))
        .add_style(heading_style("Heading1", "Heading 1", 32))
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
        .add_paragraph(styled_paragraph("Title", &fields.topic))
        .add_paragraph(styled_paragraph("Heading1", "Executive Summary"))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(fields.summary.as_str())));

    if !fields.sources.is_empty() {
        docx = docx.add_paragraph(styled_paragraph("Heading1", "Sources"));
        for source in &fields.sources {
            docx = docx.add_paragraph(
                Paragraph::new()
                    .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
                    .add_run(Run::new().add_text(source.as_str())),
            );
        }
    }

    let generated = chrono::Local::now().format("%Y-%m-%d");
    docx.footer(
        Footer::new().add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(format!("Generated on {generated}"))),
        ),
    )
}

/// Pack the composed document into an in-memory `.docx` archive.
pub fn build_document(fields: &ReportFields) -> Result<Vec<u8>> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    compose(fields).build().pack(&mut buffer)?;
    Ok(buffer.into_inner())
}

fn heading_style(id: &str, name: &str, size: usize) -> Style {
    Style::new(id, StyleType::Paragraph).name(name).size(size).bold()
}

fn styled_paragraph(style: &str, text: &str) -> Paragraph {
    Paragraph::new()
        .style(style)
        .add_run(Run::new().add_text(text))
}
