//! PDF serialization for wrapped, paginated text.
//!
//! Uses the built-in Helvetica / Helvetica-Bold Type1 fonts with WinAnsi
//! encoding, so no font data is embedded.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::export::font_metrics::PageLayout;
use crate::export::ExportError;

const BODY_FONT: &str = "F1";
const TITLE_FONT: &str = "F2";

/// Builds a PDF whose first page starts with `title` in bold, followed by the
/// body lines of `pages`.
pub fn write_pdf(
    title: &str,
    pages: &[Vec<String>],
    layout: &PageLayout,
) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let body_font_id = doc.add_object(type1_font("Helvetica"));
    let title_font_id = doc.add_object(type1_font("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            BODY_FONT => body_font_id,
            TITLE_FONT => title_font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for (index, lines) in pages.iter().enumerate() {
        let mut operations = Vec::new();
        let body_top = if index == 0 {
            push_title(&mut operations, title, layout);
            layout.body_baseline_pt
        } else {
            layout.continuation_baseline_pt
        };
        push_body(&mut operations, lines, body_top, layout);

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let media_box: Vec<Object> = vec![
        0_i64.into(),
        0_i64.into(),
        layout.page_width_pt.into(),
        layout.page_height_pt.into(),
    ];
    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id: ObjectId = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn type1_font(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn push_title(operations: &mut Vec<Operation>, title: &str, layout: &PageLayout) {
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![TITLE_FONT.into(), layout.title_font_size_pt.into()],
    ));
    operations.push(Operation::new(
        "Td",
        vec![
            layout.margin_left_pt.into(),
            (layout.page_height_pt - layout.title_baseline_pt).into(),
        ],
    ));
    operations.push(Operation::new(
        "Tj",
        vec![Object::string_literal(encode_win_ansi(title))],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn push_body(
    operations: &mut Vec<Operation>,
    lines: &[String],
    first_baseline_pt: i64,
    layout: &PageLayout,
) {
    if lines.is_empty() {
        return;
    }
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![BODY_FONT.into(), layout.body_font_size_pt.into()],
    ));
    operations.push(Operation::new("TL", vec![layout.line_height_pt.into()]));
    operations.push(Operation::new(
        "Td",
        vec![
            layout.margin_left_pt.into(),
            (layout.page_height_pt - first_baseline_pt).into(),
        ],
    ));
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("T*", vec![]));
        }
        if !line.is_empty() {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(line))],
            ));
        }
    }
    operations.push(Operation::new("ET", vec![]));
}

/// Encodes text for a WinAnsi Type1 font. Latin-1 passes through, common
/// typographic punctuation is remapped, anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '\t' => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::font_metrics::default_page_layout;

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Ada (C++)"), b"Ada (C++)".to_vec());
        assert_eq!(encode_win_ansi("• café – “ok”"), vec![
            0x95, b' ', b'c', b'a', b'f', 0xE9, b' ', 0x96, b' ', 0x93, b'o', b'k', 0x94,
        ]);
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }

    #[test]
    fn test_write_pdf_emits_one_page_per_chunk() {
        let pages = vec![
            vec!["- Built a compiler".to_string()],
            vec!["- Led a team".to_string()],
        ];
        let bytes = write_pdf("My Resume", &pages, &default_page_layout()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
