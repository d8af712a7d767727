//! Static Helvetica metrics and the fixed page geometry of exported documents.
//!
//! Widths are the standard Helvetica AFM advance widths divided by 1000, i.e.
//! em units relative to the font size. The PDF uses the built-in Helvetica
//! Type1 font, so these tables match what a viewer draws exactly for ASCII.
//! Index = (char as usize) - 32, covering 0x20..=0x7E.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry in PDF points (1/72 in), measured from the top-left corner.
///
/// Defaults mirror a jsPDF A4 document: title at 20 mm, body from 30 mm,
/// 20 mm left margin, body wrapped to 180 mm, line height 1.15 × font size.
#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    pub page_width_pt: i64,
    pub page_height_pt: i64,
    pub margin_left_pt: i64,
    /// Baseline of the title on the first page.
    pub title_baseline_pt: i64,
    pub title_font_size_pt: i64,
    /// Baseline of the first body line on the first page.
    pub body_baseline_pt: i64,
    pub body_font_size_pt: i64,
    /// Baseline of the first body line on continuation pages.
    pub continuation_baseline_pt: i64,
    pub bottom_margin_pt: i64,
    pub line_height_pt: i64,
    pub text_width_pt: i64,
}

/// A4 portrait, Helvetica 16pt bold title, Helvetica 12pt body.
pub fn default_page_layout() -> PageLayout {
    PageLayout {
        page_width_pt: 595,
        page_height_pt: 842,
        margin_left_pt: 57,
        title_baseline_pt: 57,
        title_font_size_pt: 16,
        body_baseline_pt: 85,
        body_font_size_pt: 12,
        continuation_baseline_pt: 57,
        bottom_margin_pt: 57,
        line_height_pt: 14,
        text_width_pt: 510,
    }
}

impl PageLayout {
    /// Usable body width in em units at the body font size.
    pub fn text_width_em(&self) -> f32 {
        self.text_width_pt as f32 / self.body_font_size_pt as f32
    }

    pub fn first_page_lines(&self) -> usize {
        self.lines_from(self.body_baseline_pt)
    }

    pub fn continuation_page_lines(&self) -> usize {
        self.lines_from(self.continuation_baseline_pt)
    }

    fn lines_from(&self, first_baseline_pt: i64) -> usize {
        let last_baseline = self.page_height_pt - self.bottom_margin_pt;
        if last_baseline < first_baseline_pt || self.line_height_pt <= 0 {
            return 1;
        }
        ((last_baseline - first_baseline_pt) / self.line_height_pt) as usize + 1
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback for characters outside printable ASCII.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Rendered width of `s` in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.measure_char(c)).sum()
    }

    pub fn measure_char(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }
}

/// Helvetica (regular).
pub static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    space_width: 0.278,
};
