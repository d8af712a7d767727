//! Prompt construction: pure mapping from (kind, profile, inputs) to a prompt.
//!
//! Never fails and never validates: required-field checks belong to the
//! orchestrator. Missing values are interpolated as empty text.

use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, JOB_DESCRIPTION_LINE_TEMPLATE, PORTFOLIO_PROMPT_TEMPLATE,
    RESUME_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{
    NO_FENCES_INSTRUCTION, NO_PREAMBLE_INSTRUCTION, TAILWIND_SCRIPT_TAG,
};
use crate::models::artifact::{ArtifactInputs, ArtifactKind};
use crate::models::profile::Profile;

pub fn build_prompt(kind: ArtifactKind, profile: &Profile, inputs: &ArtifactInputs) -> String {
    match kind {
        ArtifactKind::Resume => fill_template(
            RESUME_PROMPT_TEMPLATE,
            &[
                ("name", profile.name.as_str()),
                ("target_job_title", inputs.resume.target_job_title.as_str()),
                ("skills", profile.skills.as_str()),
                ("raw_experience", profile.raw_experience.as_str()),
                ("no_preamble", NO_PREAMBLE_INSTRUCTION),
            ],
        ),
        ArtifactKind::CoverLetter => {
            let letter = &inputs.cover_letter;
            let job_description_line = if letter.job_description.trim().is_empty() {
                String::new()
            } else {
                fill_template(
                    JOB_DESCRIPTION_LINE_TEMPLATE,
                    &[("job_description", letter.job_description.as_str())],
                )
            };
            fill_template(
                COVER_LETTER_PROMPT_TEMPLATE,
                &[
                    ("name", profile.name.as_str()),
                    ("skills", profile.skills.as_str()),
                    ("raw_experience", profile.raw_experience.as_str()),
                    ("company_name", letter.company_name.as_str()),
                    ("job_description_line", job_description_line.as_str()),
                ],
            )
        }
        ArtifactKind::Portfolio => fill_template(
            PORTFOLIO_PROMPT_TEMPLATE,
            &[
                ("name", profile.name.as_str()),
                ("skills", profile.skills.as_str()),
                ("raw_experience", profile.raw_experience.as_str()),
                ("email", profile.email.as_str()),
                ("no_fences", NO_FENCES_INSTRUCTION),
                ("tailwind_script", TAILWIND_SCRIPT_TAG),
            ],
        ),
    }
}

/// Replaces `{key}` placeholders in one left-to-right pass.
///
/// Substituted values are copied verbatim and never rescanned, so user text
/// containing `{name}` stays literal. Unknown placeholders are kept as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let replaced = after_open.find('}').and_then(|close| {
            let key = &after_open[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}
