// In-memory session state. Nothing here outlives the process.

pub mod artifacts;
pub mod handlers;
pub mod inputs;
pub mod profile;

pub use artifacts::{ArtifactStatus, ArtifactStore};
pub use inputs::InputStore;
pub use profile::ProfileStore;
