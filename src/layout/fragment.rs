//! Rendered fragments: the immutable output of one successful `next()`.

use crate::geometry::{Position, Size};
use crate::paint::Surface;
use crate::text::TextStyle;

/// A laid-out, paintable piece of content.
///
/// The declared size is what the fragment claims on the page. For composites
/// it is independent of where the children sit: a decorator may claim more
/// than its child uses to keep a margin blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    size: Size,
    content: FragmentContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FragmentContent {
    /// Occupies space, draws nothing.
    Blank,
    /// Lines of text, top to bottom.
    Text { lines: Vec<TextLine>, style: TextStyle },
    /// Child fragments at fixed offsets from this fragment's origin.
    Composite(Vec<Placement>),
}

/// One line of a text fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Top of the line, relative to the fragment.
    pub y: i32,
    pub width: i32,
}

/// A child fragment and where it sits inside its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub fragment: Fragment,
}

impl Fragment {
    /// Negative sizes are clamped to zero.
    pub fn new(size: Size, content: FragmentContent) -> Self {
        Self {
            size: size.non_negative(),
            content,
        }
    }

    pub fn blank(size: Size) -> Self {
        Fragment::new(size, FragmentContent::Blank)
    }

    pub fn composite(size: Size, children: Vec<Placement>) -> Self {
        Fragment::new(size, FragmentContent::Composite(children))
    }

    /// A composite holding a single child at `position`.
    pub fn wrap(child: Fragment, position: Position, size: Size) -> Self {
        Fragment::composite(
            size,
            vec![Placement {
                position,
                fragment: child,
            }],
        )
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn content(&self) -> &FragmentContent {
        &self.content
    }

    /// Placed children. Empty for leaves.
    pub fn children(&self) -> &[Placement] {
        match &self.content {
            FragmentContent::Composite(children) => children,
            FragmentContent::Blank | FragmentContent::Text { .. } => &[],
        }
    }

    /// Paint this fragment with its top-left corner at `origin`.
    ///
    /// Composites only relocate; drawing is left to the leaves.
    pub fn paint(&self, surface: &mut dyn Surface, origin: Position) {
        match &self.content {
            FragmentContent::Blank => {}
            FragmentContent::Text { lines, style } => {
                for line in lines {
                    let at = origin.translate(Position::new(0, line.y));
                    surface.draw_text(at, &line.text, style);
                }
            }
            FragmentContent::Composite(children) => {
                for child in children {
                    child.fragment.paint(surface, origin.translate(child.position));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DisplayList, DrawCommand};

    fn text(s: &str, width: i32) -> Fragment {
        Fragment::new(
            Size::new(width, 10),
            FragmentContent::Text {
                lines: vec![TextLine {
                    text: s.to_string(),
                    y: 0,
                    width,
                }],
                style: TextStyle::default(),
            },
        )
    }

    #[test]
    fn negative_size_clamped() {
        assert_eq!(Fragment::blank(Size::new(-4, 3)).size(), Size::new(0, 3));
    }

    #[test]
    fn zero_size_fragment_is_still_a_fragment() {
        let f = Fragment::blank(Size::ZERO);
        assert_eq!(f.size(), Size::ZERO);
        assert!(f.children().is_empty());
    }

    #[test]
    fn nested_offsets_accumulate_when_painting() {
        let inner = Fragment::wrap(text("hi", 20), Position::new(5, 7), Size::new(25, 17));
        let outer = Fragment::wrap(inner, Position::new(100, 200), Size::new(125, 217));

        let mut list = DisplayList::default();
        outer.paint(&mut list, Position::new(1, 1));

        assert_eq!(list.commands.len(), 1);
        match &list.commands[0] {
            DrawCommand::Text { x, y, text, .. } => {
                assert_eq!((*x, *y), (106, 208));
                assert_eq!(text, "hi");
            }
        }
    }

    #[test]
    fn declared_size_independent_of_children() {
        let f = Fragment::wrap(
            Fragment::blank(Size::new(10, 10)),
            Position::ORIGIN,
            Size::new(300, 40),
        );
        assert_eq!(f.size(), Size::new(300, 40));
        assert_eq!(f.children()[0].fragment.size(), Size::new(10, 10));
    }
}
