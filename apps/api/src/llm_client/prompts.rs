// Cross-cutting prompt fragments shared by every artifact template.
// Per-kind templates live in generation::prompts.

/// Output must be the artifact itself, with nothing around it.
pub const NO_PREAMBLE_INSTRUCTION: &str = "No intro text.";

/// Forbids fenced code blocks around raw markup.
pub const NO_FENCES_INSTRUCTION: &str =
    "DO NOT wrap it in markdown code blocks (like ```html). No explanations.";

/// Styling framework the portfolio page pulls in from a CDN.
pub const TAILWIND_SCRIPT_TAG: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;
