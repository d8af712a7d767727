//! Result slots for the three artifact kinds.
//!
//! Each slot is replaced wholesale under the write lock, so readers observe
//! either the previous result or the new one. Slots never influence each other.

use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::models::artifact::{ArtifactFormat, ArtifactKind, ArtifactSlot, GenerationResult};

#[derive(Debug, Default)]
struct Slots {
    resume: ArtifactSlot,
    cover_letter: ArtifactSlot,
    portfolio: ArtifactSlot,
}

impl Slots {
    fn slot(&self, kind: ArtifactKind) -> &ArtifactSlot {
        match kind {
            ArtifactKind::Resume => &self.resume,
            ArtifactKind::CoverLetter => &self.cover_letter,
            ArtifactKind::Portfolio => &self.portfolio,
        }
    }

    fn slot_mut(&mut self, kind: ArtifactKind) -> &mut ArtifactSlot {
        match kind {
            ArtifactKind::Resume => &mut self.resume,
            ArtifactKind::CoverLetter => &mut self.cover_letter,
            ArtifactKind::Portfolio => &mut self.portfolio,
        }
    }
}

/// One line of the artifact overview.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactStatus {
    pub kind: ArtifactKind,
    pub ready: bool,
    pub format: ArtifactFormat,
    pub pdf_exportable: bool,
}

#[derive(Debug, Default)]
pub struct ArtifactStore {
    slots: RwLock<Slots>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot for `result.kind`.
    pub fn set(&self, result: GenerationResult) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        let kind = result.kind;
        *slots.slot_mut(kind) = ArtifactSlot::Ready(result);
    }

    pub fn get(&self, kind: ArtifactKind) -> ArtifactSlot {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .slot(kind)
            .clone()
    }

    pub fn overview(&self) -> Vec<ArtifactStatus> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        ArtifactKind::ALL
            .iter()
            .map(|&kind| ArtifactStatus {
                kind,
                ready: !slots.slot(kind).is_empty(),
                format: kind.format(),
                pdf_exportable: kind.is_pdf_exportable(),
            })
            .collect()
    }
}
