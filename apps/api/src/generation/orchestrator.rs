//! Artifact generation: orchestrates one generation per call.
//!
//! Flow: snapshot profile + inputs → required-field check → busy guard →
//!       build prompt → GenerationClient → sanitize → ArtifactStore.
//!
//! Validation happens before the busy flag is touched and before any network
//! call. A failed call leaves the artifact slot as it was.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::busy::{BusyFlag, GenerationState};
use crate::generation::prompt_builder::build_prompt;
use crate::generation::sanitizer::sanitize;
use crate::llm_client::GenerationClient;
use crate::models::artifact::{ArtifactInputs, ArtifactKind, GenerationResult, InputField};
use crate::models::profile::{Profile, ProfileField};
use crate::store::{ArtifactStore, InputStore, ProfileStore};

pub struct GenerationOrchestrator {
    profile: Arc<ProfileStore>,
    inputs: Arc<InputStore>,
    artifacts: Arc<ArtifactStore>,
    client: Arc<dyn GenerationClient>,
    busy: BusyFlag,
}

impl GenerationOrchestrator {
    pub fn new(
        profile: Arc<ProfileStore>,
        inputs: Arc<InputStore>,
        artifacts: Arc<ArtifactStore>,
        client: Arc<dyn GenerationClient>,
    ) -> Self {
        Self {
            profile,
            inputs,
            artifacts,
            client,
            busy: BusyFlag::new(),
        }
    }

    pub fn state(&self) -> GenerationState {
        self.busy.state()
    }

    /// Generates `kind` from the current profile and inputs and stores it.
    ///
    /// Rejects with `AppError::Busy` while any other generation is in flight;
    /// requests are never queued.
    pub async fn generate(&self, kind: ArtifactKind) -> Result<GenerationResult, AppError> {
        let profile = self.profile.snapshot();
        let inputs = self.inputs.snapshot();

        check_required_fields(kind, &profile, &inputs)?;

        let guard = self.busy.try_begin(kind).map_err(|current| {
            warn!("Rejected {} generation: {} generation in flight", kind, current);
            AppError::Busy(current)
        })?;

        let prompt = build_prompt(kind, &profile, &inputs);
        info!(
            "Generating {} with {} ({} prompt chars)",
            guard.kind(),
            self.client.model(),
            prompt.len()
        );

        let raw = self.client.complete(&prompt).await.map_err(|e| {
            warn!("{} generation failed: {}", kind, e);
            AppError::from(e)
        })?;

        let result = GenerationResult::new(kind, sanitize(kind, &raw));
        info!(
            "Generated {} {} ({} chars)",
            kind,
            result.id,
            result.content.len()
        );
        self.artifacts.set(result.clone());

        Ok(result)
    }
}

/// Per-kind precondition. Whitespace-only counts as missing.
fn check_required_fields(
    kind: ArtifactKind,
    profile: &Profile,
    inputs: &ArtifactInputs,
) -> Result<(), AppError> {
    let (field, value) = match kind {
        ArtifactKind::Resume => {
            let field = ProfileField::RawExperience;
            (field.as_str(), profile.get(field))
        }
        ArtifactKind::CoverLetter => {
            let field = InputField::CompanyName;
            (field.as_str(), inputs.get(field))
        }
        ArtifactKind::Portfolio => {
            let field = ProfileField::Name;
            (field.as_str(), profile.get(field))
        }
    };
    if value.trim().is_empty() {
        return Err(AppError::missing_field(kind, field));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
