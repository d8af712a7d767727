//! Axum route handlers for session state: profile, inputs and artifact reads.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::artifact::{
    ArtifactFormat, ArtifactInputs, ArtifactKind, ArtifactSlot, GenerationResult, InputsPatch,
};
use crate::models::profile::{Profile, ProfilePatch};
use crate::state::AppState;
use crate::store::ArtifactStatus;

/// Scripts may run; same-origin access, storage, forms and top navigation are denied.
pub const PREVIEW_CSP: &str = "sandbox allow-scripts";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Empty,
    Ready,
}

#[derive(Debug, Serialize)]
pub struct ArtifactResponse {
    pub kind: ArtifactKind,
    pub status: SlotStatus,
    pub format: ArtifactFormat,
    pub pdf_exportable: bool,
    pub result: Option<GenerationResult>,
}

#[derive(Debug, Serialize)]
pub struct ArtifactListResponse {
    pub artifacts: Vec<ArtifactStatus>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.snapshot())
}

/// PATCH /api/v1/profile
///
/// Each present field overwrites the stored value; absent fields are kept.
pub async fn handle_patch_profile(
    State(state): State<AppState>,
    Json(patch): Json<ProfilePatch>,
) -> Json<Profile> {
    for (field, value) in patch.into_updates() {
        state.profile.set_field(field, value);
    }
    Json(state.profile.snapshot())
}

/// GET /api/v1/inputs
pub async fn handle_get_inputs(State(state): State<AppState>) -> Json<ArtifactInputs> {
    Json(state.inputs.snapshot())
}

/// PATCH /api/v1/inputs
pub async fn handle_patch_inputs(
    State(state): State<AppState>,
    Json(patch): Json<InputsPatch>,
) -> Json<ArtifactInputs> {
    for (field, value) in patch.into_updates() {
        state.inputs.set_field(field, value);
    }
    Json(state.inputs.snapshot())
}

/// GET /api/v1/artifacts
pub async fn handle_list_artifacts(State(state): State<AppState>) -> Json<ArtifactListResponse> {
    Json(ArtifactListResponse {
        artifacts: state.artifacts.overview(),
    })
}

/// GET /api/v1/artifacts/:kind
///
/// Never-generated kinds answer 200 with `status: "empty"` and no result.
pub async fn handle_get_artifact(
    State(state): State<AppState>,
    Path(kind): Path<ArtifactKind>,
) -> Json<ArtifactResponse> {
    let (status, result) = match state.artifacts.get(kind) {
        ArtifactSlot::Empty => (SlotStatus::Empty, None),
        ArtifactSlot::Ready(result) => (SlotStatus::Ready, Some(result)),
    };
    Json(ArtifactResponse {
        kind,
        status,
        format: kind.format(),
        pdf_exportable: kind.is_pdf_exportable(),
        result,
    })
}

/// GET /api/v1/portfolio/preview
///
/// Serves the generated page for live rendering. The content comes from an
/// untrusted generator, so it is isolated with a sandboxing CSP.
pub async fn handle_portfolio_preview(State(state): State<AppState>) -> Result<Response, AppError> {
    let slot = state.artifacts.get(ArtifactKind::Portfolio);
    let Some(html) = slot.content() else {
        return Err(AppError::NotFound(
            "No portfolio has been generated yet".to_string(),
        ));
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_SECURITY_POLICY, PREVIEW_CSP),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        html.to_string(),
    )
        .into_response())
}
