//! Single-flight guard for generation requests.
//!
//! `GenerationState` is the whole state machine: `Idle -> Generating(kind)` only
//! through `BusyFlag::try_begin`, and back to `Idle` only when the returned
//! `BusyGuard` is dropped. Dropping covers every exit path of the owner,
//! including early returns, panics and a cancelled future.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::debug;

use crate::models::artifact::ArtifactKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "kind", rename_all = "snake_case")]
pub enum GenerationState {
    Idle,
    Generating(ArtifactKind),
}

impl GenerationState {
    pub fn is_busy(&self) -> bool {
        matches!(self, GenerationState::Generating(_))
    }
}

#[derive(Debug)]
pub struct BusyFlag {
    state: Mutex<GenerationState>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GenerationState::Idle),
        }
    }

    pub fn state(&self) -> GenerationState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves to `Generating(kind)` if idle. When a generation is already in
    /// flight, returns the kind that holds the flag.
    pub fn try_begin(&self, kind: ArtifactKind) -> Result<BusyGuard<'_>, ArtifactKind> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            GenerationState::Generating(current) => Err(current),
            GenerationState::Idle => {
                *state = GenerationState::Generating(kind);
                debug!("Busy flag set for {}", kind);
                Ok(BusyGuard { flag: self, kind })
            }
        }
    }
}

impl Default for BusyFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the flag for one generation. Releases it on drop.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a BusyFlag,
    kind: ArtifactKind,
}

impl BusyGuard<'_> {
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self
            .flag
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *state = GenerationState::Idle;
        debug!("Busy flag cleared after {}", self.kind);
    }
}
