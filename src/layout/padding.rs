//! Four-sided inset.
//!
//! Unlike [`super::OffsetCursor`], padding never stretches: the composite is
//! exactly the child plus the insets.

use super::{next_in, Fragment, LayoutCursor, Next};
use crate::geometry::{Position, Size};

#[derive(Debug, Clone)]
pub struct PaddingCursor<C> {
    target: C,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl<C: LayoutCursor> PaddingCursor<C> {
    /// Insets are in device units.
    pub fn new(target: C, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            target,
            left,
            top,
            right,
            bottom,
        }
    }

    fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

impl<C: LayoutCursor> LayoutCursor for PaddingCursor<C> {
    fn has_next(&self) -> bool {
        self.target.has_next()
    }

    fn minimum_size(&self) -> Size {
        self.target
            .minimum_size()
            .expand(self.horizontal(), self.vertical())
    }

    fn preferred_size(&self) -> Size {
        self.target
            .preferred_size()
            .expand(self.horizontal(), self.vertical())
    }

    fn next(&mut self, width: i32, height: i32) -> Next {
        let inner_width = width.saturating_sub(self.horizontal());
        let inner_height = height.saturating_sub(self.vertical());
        let (horizontal, vertical) = (self.horizontal(), self.vertical());
        let at = Position::new(self.left, self.top);

        let next = next_in(&mut self.target, inner_width, inner_height);
        if next.is_no_fit() {
            log::trace!("padding: target does not fit {}x{}", inner_width, inner_height);
        }
        next.map(|piece| {
            let size = piece.size().expand(horizontal, vertical);
            Fragment::wrap(piece, at, size)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::Script;

    #[test]
    fn sizes_include_insets() {
        let cursor = PaddingCursor::new(Script::new(&[Size::new(50, 50)]), 1, 2, 3, 4);
        assert_eq!(cursor.minimum_size(), Size::new(54, 56));
        assert_eq!(cursor.preferred_size(), Size::new(54, 56));
    }

    #[test]
    fn composite_hugs_child_plus_insets() {
        let mut cursor = PaddingCursor::new(Script::new(&[Size::new(50, 50)]), 10, 10, 10, 10);
        let f = cursor.next(200, 200).into_fragment().unwrap();
        assert_eq!(f.size(), Size::new(70, 70));
        assert_eq!(f.children()[0].position, Position::new(10, 10));
        assert_eq!(f.children()[0].fragment.size(), Size::new(50, 50));
    }

    #[test]
    fn asymmetric_insets() {
        let mut cursor = PaddingCursor::new(Script::new(&[Size::new(20, 10)]), 1, 2, 3, 4);
        let f = cursor.next(100, 100).into_fragment().unwrap();
        assert_eq!(f.size(), Size::new(24, 16));
        assert_eq!(f.children()[0].position, Position::new(1, 2));
        assert_eq!(cursor.target.offered(), vec![Size::new(96, 94)]);
    }

    #[test]
    fn huge_insets_saturate() {
        let mut cursor = PaddingCursor::new(Script::new(&[Size::new(i32::MAX, 1)]), 10, 0, 10, 0);
        assert_eq!(cursor.minimum_size(), Size::new(i32::MAX, 1));
        assert!(cursor.next(i32::MIN, 10).is_no_fit());
        assert!(cursor.target.offered().is_empty());
    }

    #[test]
    fn no_fit_propagates() {
        let mut cursor = PaddingCursor::new(Script::new(&[Size::new(50, 50)]), 10, 10, 10, 10);
        assert!(cursor.next(69, 200).is_no_fit());
        assert!(cursor.next(70, 70).is_fragment());
    }
}
