//! # Text
//!
//! Line breaking for text leaves, and the measurement seam they depend on.
//!
//! Folio does not compute font metrics or shape text. It asks a
//! [`TextMeasure`] how wide a string is and how tall a line is, in points,
//! and breaks lines at UAX #14 opportunities from `unicode-linebreak`. A word
//! wider than the whole region is split between characters rather than
//! refusing to make progress.

use serde::{Deserialize, Serialize};
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Font selection for a text leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default = "default_family")]
    pub font_family: String,
    /// Font size in points.
    #[serde(default = "default_size")]
    pub font_size: f64,
}

fn default_family() -> String {
    "Helvetica".to_string()
}

fn default_size() -> f64 {
    12.0
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: default_family(),
            font_size: default_size(),
        }
    }
}

/// Text measurement, supplied by whoever owns the fonts.
pub trait TextMeasure: std::fmt::Debug + Send + Sync {
    /// Advance width of `text`, in points.
    fn text_width(&self, text: &str, style: &TextStyle) -> f64;

    /// Distance from one line's top to the next, in points.
    fn line_height(&self, style: &TextStyle) -> f64;
}

/// Fixed-pitch metrics: every character advances the same fraction of the
/// font size. Good enough for previews of monospaced output, and exact for
/// tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonospaceMetrics {
    /// Advance of one character, as a fraction of the font size.
    pub advance: f64,
    /// Line height, as a multiple of the font size.
    pub leading: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        // Courier proportions.
        Self {
            advance: 0.6,
            leading: 1.2,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str, style: &TextStyle) -> f64 {
        text.chars().count() as f64 * self.advance * style.font_size
    }

    fn line_height(&self, style: &TextStyle) -> f64 {
        self.leading * style.font_size
    }
}

/// Where one line ends and the next begins, as byte offsets into the text the
/// line was broken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBreak {
    /// End of the visible part of the line (trailing whitespace excluded).
    pub end: usize,
    /// Start of the following line.
    pub next: usize,
}

/// Take the longest first line of `text` no wider than `max_width`.
///
/// Prefers UAX #14 break opportunities and stops at the first mandatory one.
/// If not even the first word fits, falls back to the longest character
/// prefix. Returns `None` when the text is empty or not one character fits.
pub fn break_line<F>(text: &str, max_width: i32, width_of: F) -> Option<LineBreak>
where
    F: Fn(&str) -> i32,
{
    if text.is_empty() {
        return None;
    }

    let mut best = None;
    for (offset, opportunity) in linebreaks(text) {
        let visible = text[..offset].trim_end();
        if width_of(visible) > max_width {
            break;
        }
        best = Some(LineBreak {
            end: visible.len(),
            next: offset,
        });
        if let BreakOpportunity::Mandatory = opportunity {
            break;
        }
    }

    best.or_else(|| break_within_word(text, max_width, &width_of))
}

fn break_within_word<F>(text: &str, max_width: i32, width_of: &F) -> Option<LineBreak>
where
    F: Fn(&str) -> i32,
{
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let candidate = idx + ch.len_utf8();
        if width_of(&text[..candidate]) > max_width {
            break;
        }
        end = candidate;
    }
    (end > 0).then_some(LineBreak { end, next: end })
}

/// Width of the widest unbreakable word in `text`.
pub fn widest_word<F>(text: &str, width_of: F) -> i32
where
    F: Fn(&str) -> i32,
{
    let mut start = 0;
    let mut widest = 0;
    for (offset, _) in linebreaks(text) {
        widest = widest.max(width_of(text[start..offset].trim_end()));
        start = offset;
    }
    widest
}

/// Width of the widest paragraph and the number of paragraphs, where
/// paragraphs are separated by mandatory breaks.
pub fn paragraphs<F>(text: &str, width_of: F) -> (i32, usize)
where
    F: Fn(&str) -> i32,
{
    let mut start = 0;
    let mut widest = 0;
    let mut count = 0;
    for (offset, opportunity) in linebreaks(text) {
        if let BreakOpportunity::Mandatory = opportunity {
            widest = widest.max(width_of(text[start..offset].trim_end()));
            count += 1;
            start = offset;
        }
    }
    (widest, count)
}
