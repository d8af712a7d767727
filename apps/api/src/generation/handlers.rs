//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::generation::busy::GenerationState;
use crate::models::artifact::{ArtifactKind, GenerationResult};
use crate::state::AppState;

/// GET /api/v1/status
pub async fn handle_status(State(state): State<AppState>) -> Json<GenerationState> {
    Json(state.orchestrator.state())
}

/// POST /api/v1/generate/:kind
///
/// Runs on its own task: once started, a generation finishes even if the
/// requesting client disconnects.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(kind): Path<ArtifactKind>,
) -> Result<Json<GenerationResult>, AppError> {
    let orchestrator = state.orchestrator.clone();
    let result = tokio::spawn(async move { orchestrator.generate(kind).await })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("generation task failed: {e}")))??;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::generation::orchestrator::tests::ScriptedClient;
    use crate::models::artifact::{ArtifactSlot, InputField};
    use crate::models::profile::ProfileField;
    use crate::state::tests::test_state;

    #[tokio::test]
    async fn test_generate_portfolio_stores_clean_html() {
        let client = Arc::new(ScriptedClient::replying("```html\n<html>OK</html>\n```"));
        let state = test_state(client.clone(), std::path::Path::new("unused"));
        state.profile.set_field(ProfileField::Name, "Ada".to_string());

        let Json(result) = handle_generate(State(state.clone()), Path(ArtifactKind::Portfolio))
            .await
            .unwrap();

        assert_eq!(result.content, "<html>OK</html>");
        assert_eq!(
            state.artifacts.get(ArtifactKind::Portfolio).content(),
            Some("<html>OK</html>")
        );
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_cover_letter_without_company_is_rejected() {
        let client = Arc::new(ScriptedClient::replying("Dear Acme"));
        let state = test_state(client.clone(), std::path::Path::new("unused"));
        state.profile.set_field(ProfileField::Name, "Ada".to_string());
        state.inputs.set_field(InputField::CompanyName, String::new());

        let err = handle_generate(State(state.clone()), Path(ArtifactKind::CoverLetter))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(client.calls(), 0);
        assert_eq!(state.artifacts.get(ArtifactKind::CoverLetter), ArtifactSlot::Empty);
    }

    #[tokio::test]
    async fn test_status_follows_in_flight_generation() {
        let client = Arc::new(ScriptedClient::replying("- Built a compiler"));
        let state = test_state(client.clone(), std::path::Path::new("unused"));
        state
            .profile
            .set_field(ProfileField::RawExperience, "built a compiler".to_string());
        let release = client.hold();

        let Json(before) = handle_status(State(state.clone())).await;
        assert_eq!(before, GenerationState::Idle);

        let in_flight = tokio::spawn(handle_generate(
            State(state.clone()),
            Path(ArtifactKind::Resume),
        ));
        client.wait_until_called().await;

        let Json(during) = handle_status(State(state.clone())).await;
        assert_eq!(during, GenerationState::Generating(ArtifactKind::Resume));

        release.send(()).unwrap();
        in_flight.await.unwrap().unwrap();

        let Json(after) = handle_status(State(state)).await;
        assert_eq!(after, GenerationState::Idle);
    }
}
