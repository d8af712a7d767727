use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::llm_client::LlmError;
use crate::models::artifact::ArtifactKind;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant leaves the session consistent: busy state back to idle and
/// no artifact slot touched, so the user can retry right away.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A {0} generation is already in progress")]
    Busy(ArtifactKind),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Missing required input for a generation.
    pub fn missing_field(kind: ArtifactKind, field: &str) -> Self {
        AppError::Validation(format!("{field} is required to generate a {kind}"))
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        AppError::Generation(err.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Export(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Busy(_) => (StatusCode::CONFLICT, "BUSY", self.to_string()),
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    "The text generation service failed. Please try again.".to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unsupported(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED",
                msg.clone(),
            ),
            AppError::Export(msg) => {
                tracing::error!("Export error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXPORT_ERROR",
                    "The document could not be exported".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::missing_field(ArtifactKind::Resume, "raw_experience"), StatusCode::BAD_REQUEST),
            (AppError::Busy(ArtifactKind::Portfolio), StatusCode::CONFLICT),
            (AppError::Generation("timeout".to_string()), StatusCode::BAD_GATEWAY),
            (AppError::NotFound("resume".to_string()), StatusCode::NOT_FOUND),
            (AppError::Unsupported("pdf".to_string()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::Export("io".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let err = AppError::missing_field(ArtifactKind::CoverLetter, "company_name");
        assert_eq!(
            err.to_string(),
            "Validation error: company_name is required to generate a cover-letter"
        );
    }

    #[test]
    fn test_llm_error_maps_to_generation() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::Generation(msg) if msg.contains("empty")));
    }
}
