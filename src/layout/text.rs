//! Cursor for text leaves.
//!
//! The cursor remembers a byte offset into the node's text. Each `next()`
//! emits as many whole lines as the region's height allows, each no wider
//! than the region, and moves the offset past them.

use super::{Fragment, FragmentContent, LayoutCursor, Next, RenderContext, TextLine};
use crate::geometry::Size;
use crate::model::TextNode;
use crate::text::{break_line, paragraphs, widest_word};

#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    node: &'a TextNode,
    ctx: RenderContext<'a>,
    line_height: i32,
    position: usize,
}

impl<'a> TextCursor<'a> {
    pub fn new(node: &'a TextNode, ctx: RenderContext<'a>) -> Self {
        let line_height = ctx
            .resolution
            .vertical(ctx.measure.line_height(node.style()));
        Self {
            node,
            ctx,
            line_height,
            position: 0,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.node.content()[self.position..]
    }

    fn width_of(&self, text: &str) -> i32 {
        self.ctx
            .resolution
            .horizontal(self.ctx.measure.text_width(text, self.node.style()))
    }
}

impl LayoutCursor for TextCursor<'_> {
    fn has_next(&self) -> bool {
        self.position < self.node.content().len()
    }

    fn minimum_size(&self) -> Size {
        if !self.has_next() {
            return Size::ZERO;
        }
        Size::new(
            widest_word(self.remaining(), |s| self.width_of(s)),
            self.line_height,
        )
    }

    fn preferred_size(&self) -> Size {
        if !self.has_next() {
            return Size::ZERO;
        }
        let (width, count) = paragraphs(self.remaining(), |s| self.width_of(s));
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        Size::new(width, self.line_height.saturating_mul(count))
    }

    fn next(&mut self, width: i32, height: i32) -> Next {
        let text = self.node.content();
        let mut position = self.position;
        let mut lines = Vec::new();
        let mut used = Size::ZERO;

        while position < text.len()
            && used
                .height
                .checked_add(self.line_height)
                .is_some_and(|h| h <= height)
        {
            let rest = &text[position..];
            let Some(line) = break_line(rest, width, |s| self.width_of(s)) else {
                break;
            };
            let visible = &rest[..line.end];
            let line_width = self.width_of(visible);
            lines.push(TextLine {
                text: visible.to_string(),
                y: used.height,
                width: line_width,
            });
            used = Size::new(
                used.width.max(line_width),
                used.height.saturating_add(self.line_height),
            );
            position += line.next;
        }

        if lines.is_empty() {
            log::trace!(
                "text: no line fits in {}x{} (line height {})",
                width,
                height,
                self.line_height
            );
            return Next::NoFit;
        }

        self.position = position;
        Next::Fragment(Fragment::new(
            used,
            FragmentContent::Text {
                lines,
                style: self.node.style().clone(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{MonospaceMetrics, TextStyle};
    use crate::units::Resolution;

    // 10pt font, 5pt per character, 12pt lines, at 72 dpi.
    const METRICS: MonospaceMetrics = MonospaceMetrics {
        advance: 0.5,
        leading: 1.2,
    };

    fn node(content: &str) -> TextNode {
        TextNode::new(
            content,
            TextStyle {
                font_size: 10.0,
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn ctx() -> RenderContext<'static> {
        RenderContext::new(Resolution::POINTS, &METRICS)
    }

    fn lines(next: &Next) -> Vec<String> {
        match next.fragment().map(|f| f.content()) {
            Some(FragmentContent::Text { lines, .. }) => {
                lines.iter().map(|l| l.text.clone()).collect()
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn sizes_follow_metrics() {
        let n = node("aaaa bb\ncccccc");
        let cursor = TextCursor::new(&n, ctx());
        assert_eq!(cursor.minimum_size(), Size::new(30, 12));
        assert_eq!(cursor.preferred_size(), Size::new(35, 24));
    }

    #[test]
    fn wraps_to_region_width() {
        let n = node("one two three four");
        let mut cursor = TextCursor::new(&n, ctx());
        let next = cursor.next(40, 1000);
        assert_eq!(lines(&next), vec!["one two", "three", "four"]);
        assert_eq!(next.fragment().unwrap().size(), Size::new(35, 36));
        assert!(!cursor.has_next());
    }

    #[test]
    fn continues_on_the_next_region() {
        let n = node("one two three four");
        let mut cursor = TextCursor::new(&n, ctx());
        let first = cursor.next(40, 24);
        assert_eq!(lines(&first), vec!["one two", "three"]);
        assert!(cursor.has_next());
        let second = cursor.next(40, 24);
        assert_eq!(lines(&second), vec!["four"]);
        assert!(!cursor.has_next());
    }

    #[test]
    fn too_short_region_is_no_fit() {
        let n = node("hello");
        let mut cursor = TextCursor::new(&n, ctx());
        assert!(cursor.next(1000, 11).is_no_fit());
        assert!(cursor.has_next());
    }

    #[test]
    fn empty_text_has_nothing() {
        let n = node("");
        let mut cursor = TextCursor::new(&n, ctx());
        assert!(!cursor.has_next());
        assert_eq!(cursor.minimum_size(), Size::ZERO);
        assert!(cursor.next(100, 100).is_no_fit());
    }

    #[test]
    fn copy_leaves_original_in_place() {
        let n = node("alpha beta gamma");
        let mut original = TextCursor::new(&n, ctx());
        let mut trial = original.copy();
        let _ = trial.next(30, 12);
        let _ = trial.next(30, 12);

        let committed = original.next(30, 12);
        assert_eq!(lines(&committed), vec!["alpha"]);
    }
}
