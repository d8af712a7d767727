//! Response cleanup applied before a result is stored.
//!
//! The portfolio prompt forbids code fences, but models still wrap HTML in
//! ```html ... ``` often enough that every portfolio response is stripped.
//! Text kinds are stored exactly as returned.

use crate::models::artifact::ArtifactKind;

const TAGGED_FENCE: &str = "```html";
const BARE_FENCE: &str = "```";

pub fn sanitize(kind: ArtifactKind, text: &str) -> String {
    match kind {
        ArtifactKind::Resume | ArtifactKind::CoverLetter => text.to_string(),
        ArtifactKind::Portfolio => strip_code_fences(text),
    }
}

/// Removes every `html`-tagged fence (any letter case), then every bare fence,
/// then trims surrounding whitespace.
fn strip_code_fences(text: &str) -> String {
    remove_ignore_ascii_case(text, TAGGED_FENCE)
        .replace(BARE_FENCE, "")
        .trim()
        .to_string()
}

fn remove_ignore_ascii_case(text: &str, needle: &str) -> String {
    let bytes = text.as_bytes();
    let pattern = needle.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied_up_to = 0;
    let mut i = 0;

    while i + pattern.len() <= bytes.len() {
        if bytes[i..i + pattern.len()].eq_ignore_ascii_case(pattern) {
            // `needle` is ASCII, so both ends of a match sit on char boundaries.
            out.push_str(&text[copied_up_to..i]);
            i += pattern.len();
            copied_up_to = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[copied_up_to..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tagged_fence_and_trims() {
        assert_eq!(
            sanitize(ArtifactKind::Portfolio, "```html\n<div/>\n```"),
            "<div/>"
        );
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(sanitize(ArtifactKind::Portfolio, "```\n<div/>\n```\n"), "<div/>");
    }

    #[test]
    fn test_tag_match_is_case_insensitive() {
        assert_eq!(
            sanitize(ArtifactKind::Portfolio, "```HTML\n<html>OK</html>\n```"),
            "<html>OK</html>"
        );
        assert_eq!(sanitize(ArtifactKind::Portfolio, "```Html<p/>```"), "<p/>");
    }

    #[test]
    fn test_unfenced_html_is_unchanged() {
        assert_eq!(sanitize(ArtifactKind::Portfolio, "<div/>"), "<div/>");
    }

    #[test]
    fn test_multiple_fences_are_all_removed() {
        let raw = "Here you go:\n```html\n<head></head>\n```\n```html\n<body></body>\n```";
        let cleaned = sanitize(ArtifactKind::Portfolio, raw);
        assert!(!cleaned.contains("```"));
        assert!(cleaned.starts_with("Here you go:"));
        assert!(cleaned.ends_with("<body></body>"));
    }

    #[test]
    fn test_text_kinds_are_passed_through() {
        let raw = "```html<x/>```";
        assert_eq!(sanitize(ArtifactKind::Resume, raw), raw);
        assert_eq!(sanitize(ArtifactKind::CoverLetter, raw), raw);
        assert_eq!(sanitize(ArtifactKind::Resume, "  - padded  \n"), "  - padded  \n");
    }

    #[test]
    fn test_non_ascii_content_survives() {
        assert_eq!(
            sanitize(ArtifactKind::Portfolio, "```html\n<p>Café – naïve ✓</p>\n```"),
            "<p>Café – naïve ✓</p>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(ArtifactKind::Portfolio, ""), "");
        assert_eq!(sanitize(ArtifactKind::Portfolio, "```"), "");
    }
}
