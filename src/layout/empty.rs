//! Cursor for blank boxes.

use super::{Fragment, LayoutCursor, Next};
use crate::geometry::Size;

/// Yields one blank fragment of a fixed size, then is exhausted.
#[derive(Debug, Clone)]
pub struct EmptyCursor {
    size: Size,
    done: bool,
}

impl EmptyCursor {
    pub fn new(size: Size) -> Self {
        Self { size, done: false }
    }
}

impl LayoutCursor for EmptyCursor {
    fn has_next(&self) -> bool {
        !self.done
    }

    fn minimum_size(&self) -> Size {
        if self.done {
            Size::ZERO
        } else {
            self.size
        }
    }

    fn preferred_size(&self) -> Size {
        self.minimum_size()
    }

    fn next(&mut self, width: i32, height: i32) -> Next {
        if self.done || !self.size.fits_in(Size::new(width, height)) {
            return Next::NoFit;
        }
        self.done = true;
        Next::Fragment(Fragment::blank(self.size))
    }
}
