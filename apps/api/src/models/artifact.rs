use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Kinds and formats
// ────────────────────────────────────────────────────────────────────────────

/// The three artifacts generated from a profile.
///
/// Every per-kind decision (required field, prompt template, response cleanup,
/// export eligibility) is an exhaustive `match` on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Resume,
    CoverLetter,
    Portfolio,
}

/// What the stored content of a kind is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactFormat {
    PlainText,
    /// Raw HTML meant for live (sandboxed) rendering, never for PDF export.
    Html,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Resume,
        ArtifactKind::CoverLetter,
        ArtifactKind::Portfolio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Resume => "resume",
            ArtifactKind::CoverLetter => "cover-letter",
            ArtifactKind::Portfolio => "portfolio",
        }
    }

    pub fn format(&self) -> ArtifactFormat {
        match self {
            ArtifactKind::Resume | ArtifactKind::CoverLetter => ArtifactFormat::PlainText,
            ArtifactKind::Portfolio => ArtifactFormat::Html,
        }
    }

    pub fn is_pdf_exportable(&self) -> bool {
        self.format() == ArtifactFormat::PlainText
    }

    /// Base name of the exported PDF. Underscores become spaces in the visible title.
    pub fn export_file_base(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::Resume => Some("My_Resume"),
            ArtifactKind::CoverLetter => Some("My_Cover_Letter"),
            ArtifactKind::Portfolio => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-kind inputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeInputs {
    pub target_job_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverLetterInputs {
    pub company_name: String,
    /// Optional; left out of the prompt when blank.
    pub job_description: String,
}

/// Inputs that belong to a single artifact flow. The portfolio has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactInputs {
    pub resume: ResumeInputs,
    pub cover_letter: CoverLetterInputs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    TargetJobTitle,
    CompanyName,
    JobDescription,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::TargetJobTitle => "target_job_title",
            InputField::CompanyName => "company_name",
            InputField::JobDescription => "job_description",
        }
    }

    /// The flow that owns this field.
    pub fn owner(&self) -> ArtifactKind {
        match self {
            InputField::TargetJobTitle => ArtifactKind::Resume,
            InputField::CompanyName | InputField::JobDescription => ArtifactKind::CoverLetter,
        }
    }
}

impl ArtifactInputs {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::TargetJobTitle => &self.resume.target_job_title,
            InputField::CompanyName => &self.cover_letter.company_name,
            InputField::JobDescription => &self.cover_letter.job_description,
        }
    }

    pub(crate) fn get_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::TargetJobTitle => &mut self.resume.target_job_title,
            InputField::CompanyName => &mut self.cover_letter.company_name,
            InputField::JobDescription => &mut self.cover_letter.job_description,
        }
    }
}

/// PATCH body for the per-kind inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputsPatch {
    pub target_job_title: Option<String>,
    pub company_name: Option<String>,
    pub job_description: Option<String>,
}

impl InputsPatch {
    pub fn into_updates(self) -> Vec<(InputField, String)> {
        [
            (InputField::TargetJobTitle, self.target_job_title),
            (InputField::CompanyName, self.company_name),
            (InputField::JobDescription, self.job_description),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

/// A successfully generated (and already sanitized) artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub id: Uuid,
    pub kind: ArtifactKind,
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(kind: ArtifactKind, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content,
            generated_at: Utc::now(),
        }
    }
}

/// Content of one artifact slot. `Empty` until the first successful generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ArtifactSlot {
    #[default]
    Empty,
    Ready(GenerationResult),
}

impl ArtifactSlot {
    pub fn content(&self) -> Option<&str> {
        match self {
            ArtifactSlot::Empty => None,
            ArtifactSlot::Ready(result) => Some(&result.content),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ArtifactSlot::Empty)
    }
}
