// Text-to-PDF export for plain-text artifacts.
// Rendering is CPU-bound; async callers run it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod handlers;
pub mod pdf;
pub mod wrap;

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::export::font_metrics::{default_page_layout, PageLayout, HELVETICA};
use crate::export::wrap::{paginate, wrap_text};

pub const PDF_EXTENSION: &str = "pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("Export task failed: {0}")]
    Task(String),
}

/// A rendered document ready to be downloaded or written to disk.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pub file_name: String,
    pub title: String,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct PdfExporter {
    layout: PageLayout,
    output_dir: PathBuf,
}

impl PdfExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            layout: default_page_layout(),
            output_dir: output_dir.into(),
        }
    }

    /// Renders `body` under a bold title derived from `file_base`
    /// (underscores shown as spaces). The file name is `file_base` + `.pdf`.
    pub fn render(&self, file_base: &str, body: &str) -> Result<PdfDocument, ExportError> {
        validate_file_base(file_base)?;
        let title = title_from_file_base(file_base);

        let lines = wrap_text(body, &HELVETICA, self.layout.text_width_em());
        let pages = paginate(lines, &self.layout);
        let bytes = pdf::write_pdf(&title, &pages, &self.layout)?;

        Ok(PdfDocument {
            file_name: format!("{file_base}.{PDF_EXTENSION}"),
            title,
            page_count: pages.len(),
            bytes,
        })
    }

    /// Renders off the async executor.
    pub async fn render_blocking(
        &self,
        file_base: &str,
        body: &str,
    ) -> Result<PdfDocument, ExportError> {
        let exporter = self.clone();
        let file_base = file_base.to_string();
        let body = body.to_string();
        tokio::task::spawn_blocking(move || exporter.render(&file_base, &body))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))?
    }

    /// Renders and writes `<output_dir>/<file_base>.pdf`, replacing any previous file.
    pub async fn save(&self, file_base: &str, body: &str) -> Result<PathBuf, ExportError> {
        let document = self.render_blocking(file_base, body).await?;
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(&document.file_name);
        tokio::fs::write(&path, &document.bytes).await?;
        info!(
            "Saved {} ({} pages, {} bytes)",
            path.display(),
            document.page_count,
            document.bytes.len()
        );
        Ok(path)
    }
}

pub fn title_from_file_base(file_base: &str) -> String {
    file_base.replace('_', " ")
}

/// File bases are used verbatim as file names, so they must stay inside the
/// output directory.
fn validate_file_base(file_base: &str) -> Result<(), ExportError> {
    let invalid = file_base.trim().is_empty()
        || file_base.contains(['/', '\\'])
        || file_base.starts_with('.');
    if invalid {
        return Err(ExportError::InvalidFileName(file_base.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_replaces_underscores() {
        assert_eq!(title_from_file_base("My_Cover_Letter"), "My Cover Letter");
    }

    #[test]
    fn test_render_names_file_and_shows_title_and_body() {
        let exporter = PdfExporter::new("unused");
        let document = exporter
            .render("My_Resume", "- Built a compiler\n- Led the parser rewrite")
            .unwrap();

        assert_eq!(document.file_name, "My_Resume.pdf");
        assert_eq!(document.title, "My Resume");
        assert_eq!(document.page_count, 1);

        let text = pdf_extract::extract_text_from_mem(&document.bytes).unwrap();
        assert!(text.contains("My Resume"), "extracted: {text}");
        assert!(text.contains("Built a compiler"), "extracted: {text}");
        assert!(text.contains("Led the parser rewrite"), "extracted: {text}");
    }

    #[test]
    fn test_long_body_spills_onto_more_pages() {
        let exporter = PdfExporter::new("unused");
        let body = (1..=120)
            .map(|i| format!("- Shipped feature number {i} to production"))
            .collect::<Vec<_>>()
            .join("\n");
        let document = exporter.render("My_Resume", &body).unwrap();

        assert_eq!(document.page_count, 3);
        let doc = lopdf::Document::load_mem(&document.bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_empty_body_still_renders_title_page() {
        let exporter = PdfExporter::new("unused");
        let document = exporter.render("My_Cover_Letter", "").unwrap();
        assert_eq!(document.page_count, 1);
        assert!(document.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_path_like_file_bases_are_rejected() {
        let exporter = PdfExporter::new("unused");
        for base in ["", "../escape", "dir/name", "..", r"a\b"] {
            assert!(
                matches!(exporter.render(base, "x"), Err(ExportError::InvalidFileName(_))),
                "{base:?} accepted"
            );
        }
    }

    #[tokio::test]
    async fn test_save_writes_pdf_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = PdfExporter::new(dir.path().join("exports"));

        let path = exporter
            .save("My_Cover_Letter", "Dear Acme,\n\nI would like to apply.")
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("exports").join("My_Cover_Letter.pdf"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
