//! # Painting
//!
//! Fragments don't know how to put pixels anywhere. They walk themselves,
//! accumulating child offsets, and hand each leaf's drawing to a [`Surface`]
//! owned by the caller: a printer device context, a preview widget, or the
//! recording [`DisplayList`] below.

use serde::Serialize;

use crate::geometry::Position;
use crate::text::TextStyle;

/// A drawing target, in device units.
pub trait Surface {
    /// Draw one line of text with its top-left corner at `at`.
    fn draw_text(&mut self, at: Position, text: &str, style: &TextStyle);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    #[serde(rename_all = "camelCase")]
    Text {
        x: i32,
        y: i32,
        text: String,
        font_family: String,
        font_size: f64,
    },
}

/// A surface that records what would have been drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl Surface for DisplayList {
    fn draw_text(&mut self, at: Position, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            x: at.x,
            y: at.y,
            text: text.to_string(),
            font_family: style.font_family.clone(),
            font_size: style.font_size,
        });
    }
}
