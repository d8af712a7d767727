use std::sync::Arc;

use crate::config::Config;
use crate::export::PdfExporter;
use crate::generation::orchestrator::GenerationOrchestrator;
use crate::llm_client::GenerationClient;
use crate::store::{ArtifactStore, InputStore, ProfileStore};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// One session per process: the stores live as long as the server does.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<ProfileStore>,
    pub inputs: Arc<InputStore>,
    pub artifacts: Arc<ArtifactStore>,
    /// Owns the busy flag; the only writer of `artifacts`.
    pub orchestrator: Arc<GenerationOrchestrator>,
    pub exporter: PdfExporter,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn GenerationClient>) -> Self {
        let profile = Arc::new(ProfileStore::new());
        let inputs = Arc::new(InputStore::new());
        let artifacts = Arc::new(ArtifactStore::new());
        let orchestrator = Arc::new(GenerationOrchestrator::new(
            profile.clone(),
            inputs.clone(),
            artifacts.clone(),
            client,
        ));
        let exporter = PdfExporter::new(config.export_dir.clone());

        Self {
            profile,
            inputs,
            artifacts,
            orchestrator,
            exporter,
            config,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::path::Path;

    use super::*;

    pub(crate) fn test_state(client: Arc<dyn GenerationClient>, export_dir: &Path) -> AppState {
        let config = Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "scripted".to_string(),
            gemini_base_url: "http://localhost".to_string(),
            export_dir: export_dir.to_path_buf(),
            port: 0,
            rust_log: "debug".to_string(),
        };
        AppState::new(config, client)
    }
}
