//! Greedy word wrap and pagination for exported text.
//!
//! Explicit newlines always start a new line and blank lines are kept, so
//! bullet lists and letter paragraphs keep their shape. A word wider than the
//! line is split at character boundaries.

use crate::export::font_metrics::{FontMetricTable, PageLayout};

/// Wraps `text` into lines no wider than `max_width_em`.
pub fn wrap_text(text: &str, metrics: &FontMetricTable, max_width_em: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, metrics, max_width_em, &mut lines);
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

fn wrap_paragraph(
    paragraph: &str,
    metrics: &FontMetricTable,
    max_width: f32,
    lines: &mut Vec<String>,
) {
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in paragraph.split_whitespace() {
        let word_width = metrics.measure_str(word);
        let space_width = if current.is_empty() {
            0.0
        } else {
            metrics.space_width
        };

        if current_width + space_width + word_width <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width += space_width + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for c in word.chars() {
                let char_width = metrics.measure_char(c);
                if !current.is_empty() && current_width + char_width > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }
                current.push(c);
                current_width += char_width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

/// Splits wrapped lines into pages. Always returns at least one page so the
/// title has somewhere to go.
pub fn paginate(lines: Vec<String>, layout: &PageLayout) -> Vec<Vec<String>> {
    let mut pages = Vec::new();
    let mut remaining = lines.into_iter().peekable();
    let mut capacity = layout.first_page_lines();

    loop {
        let page: Vec<String> = remaining.by_ref().take(capacity).collect();
        pages.push(page);
        if remaining.peek().is_none() {
            break;
        }
        capacity = layout.continuation_page_lines();
    }
    pages
}
