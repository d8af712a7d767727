//! Axum route handlers for PDF export.
//!
//! Only plain-text artifacts are exportable. The portfolio is HTML meant for
//! live rendering and is rejected here rather than flattened into a PDF.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::artifact::{ArtifactKind, ArtifactSlot};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub path: String,
}

/// Resolves the file base and body text for an exportable artifact.
fn exportable_text(state: &AppState, kind: ArtifactKind) -> Result<(&'static str, String), AppError> {
    let Some(file_base) = kind.export_file_base() else {
        return Err(AppError::Unsupported(format!(
            "{kind} is HTML served at /api/v1/portfolio/preview and cannot be exported to PDF"
        )));
    };
    match state.artifacts.get(kind) {
        ArtifactSlot::Ready(result) => Ok((file_base, result.content)),
        ArtifactSlot::Empty => Err(AppError::NotFound(format!(
            "No {kind} has been generated yet"
        ))),
    }
}

/// GET /api/v1/artifacts/:kind/pdf
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Path(kind): Path<ArtifactKind>,
) -> Result<Response, AppError> {
    let (file_base, body) = exportable_text(&state, kind)?;
    let document = state.exporter.render_blocking(file_base, &body).await?;
    info!(
        "Rendered \"{}\" for download ({} pages)",
        document.title, document.page_count
    );

    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        Bytes::from(document.bytes),
    )
        .into_response())
}

/// POST /api/v1/artifacts/:kind/export
///
/// Writes the PDF into the configured export directory.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(kind): Path<ArtifactKind>,
) -> Result<Json<ExportResponse>, AppError> {
    let (file_base, body) = exportable_text(&state, kind)?;
    let path = state.exporter.save(file_base, &body).await?;

    Ok(Json(ExportResponse {
        kind,
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: path.display().to_string(),
    }))
}
