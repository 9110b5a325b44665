//! Blank floor under the target.
//!
//! Behaves like an overlay of the target and an invisible box of the minimum
//! size. The box is never offered a region and never refuses one, so only
//! the target decides whether a step fits. Every reported size, including
//! that of each produced piece, is the component-wise max of the two. The
//! target is placed at the origin, as the first child of an overlay would be.

use super::{next_in, Fragment, LayoutCursor, Next};
use crate::geometry::{Position, Size};

#[derive(Debug, Clone)]
pub struct MinSizeCursor<C> {
    target: C,
    floor: Size,
}

impl<C: LayoutCursor> MinSizeCursor<C> {
    /// `floor` is in device units.
    pub fn new(target: C, floor: Size) -> Self {
        Self { target, floor }
    }
}

impl<C: LayoutCursor> LayoutCursor for MinSizeCursor<C> {
    fn has_next(&self) -> bool {
        self.target.has_next()
    }

    fn minimum_size(&self) -> Size {
        self.target.minimum_size().max(self.floor)
    }

    fn preferred_size(&self) -> Size {
        self.target.preferred_size().max(self.floor)
    }

    fn next(&mut self, width: i32, height: i32) -> Next {
        let floor = self.floor;
        next_in(&mut self.target, width, height).map(|piece| {
            let size = piece.size().max(floor);
            Fragment::wrap(piece, Position::ORIGIN, size)
        })
    }
}
