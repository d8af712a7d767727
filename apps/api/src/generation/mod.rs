// Artifact generation: prompt construction, single-flight orchestration and
// response cleanup. All model calls go through llm_client::GenerationClient.

pub mod busy;
pub mod handlers;
pub mod orchestrator;
pub mod prompt_builder;
pub mod prompts;
pub mod sanitizer;
