//! Alignment plus fixed displacement.
//!
//! The target is offered the region minus the displacement. Its piece is then
//! placed inside the full region according to the alignment on each axis.
//! On a start-aligned axis the result claims only what it used (piece plus
//! displacement); centered and end-aligned axes claim the whole offered
//! length, since the piece's position depends on it.

use super::{next_in, Fragment, LayoutCursor, Next};
use crate::geometry::{Position, Size};
use crate::model::Align;

#[derive(Debug, Clone)]
pub struct OffsetCursor<C> {
    target: C,
    h_align: Align,
    v_align: Align,
    /// Displacement in device units.
    offset: Position,
}

impl<C: LayoutCursor> OffsetCursor<C> {
    pub fn new(target: C, h_align: Align, v_align: Align, offset: Position) -> Self {
        Self {
            target,
            h_align,
            v_align,
            offset,
        }
    }
}

impl<C: LayoutCursor> LayoutCursor for OffsetCursor<C> {
    fn has_next(&self) -> bool {
        self.target.has_next()
    }

    fn minimum_size(&self) -> Size {
        self.target
            .minimum_size()
            .expand(self.offset.x, self.offset.y)
    }

    fn preferred_size(&self) -> Size {
        self.target
            .preferred_size()
            .expand(self.offset.x, self.offset.y)
    }

    fn next(&mut self, width: i32, height: i32) -> Next {
        let Position { x: dx, y: dy } = self.offset;
        let (inner_width, inner_height) = (width.saturating_sub(dx), height.saturating_sub(dy));
        let piece = match next_in(&mut self.target, inner_width, inner_height) {
            Next::Fragment(piece) => piece,
            Next::NoFit => {
                log::trace!("offset: target does not fit {}x{}", inner_width, inner_height);
                return Next::NoFit;
            }
        };

        let used = piece.size();
        let position = Position::new(
            self.h_align.place(width, used.width, dx),
            self.v_align.place(height, used.height, dy),
        );
        let size = Size::new(
            match self.h_align {
                Align::Start => used.width.saturating_add(dx),
                Align::Center | Align::End => width,
            },
            match self.v_align {
                Align::Start => used.height.saturating_add(dy),
                Align::Center | Align::End => height,
            },
        );

        Next::Fragment(Fragment::wrap(piece, position, size))
    }
}
