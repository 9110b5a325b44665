//! Clamp on the region offered to the target.

use super::{next_in, LayoutCursor, Next};
use crate::geometry::Size;

#[derive(Debug, Clone)]
pub struct MaxSizeCursor<C> {
    target: C,
    max_width: Option<i32>,
    max_height: Option<i32>,
}

fn clamp(value: i32, max: Option<i32>) -> i32 {
    match max {
        Some(max) => value.min(max),
        None => value,
    }
}

impl<C: LayoutCursor> MaxSizeCursor<C> {
    /// Maxima are in device units. `None`, zero, and negative values leave
    /// the axis unconstrained.
    pub fn new(target: C, max_width: Option<i32>, max_height: Option<i32>) -> Self {
        Self {
            target,
            max_width: max_width.filter(|w| *w > 0),
            max_height: max_height.filter(|h| *h > 0),
        }
    }

    fn clamp(&self, size: Size) -> Size {
        Size::new(
            clamp(size.width, self.max_width),
            clamp(size.height, self.max_height),
        )
    }
}

impl<C: LayoutCursor> LayoutCursor for MaxSizeCursor<C> {
    fn has_next(&self) -> bool {
        self.target.has_next()
    }

    fn minimum_size(&self) -> Size {
        self.clamp(self.target.minimum_size())
    }

    fn preferred_size(&self) -> Size {
        self.clamp(self.target.preferred_size())
    }

    /// The target sees the clamped region. Its piece is already within it,
    /// sits at the origin, and keeps its own size, so it is returned as is.
    fn next(&mut self, width: i32, height: i32) -> Next {
        let region = self.clamp(Size::new(width, height));
        let next = next_in(&mut self.target, region.width, region.height);
        if next.is_no_fit() {
            log::trace!("max size: target does not fit {}x{}", region.width, region.height);
        }
        next
    }
}
