//! Cursor for overlays.
//!
//! All live children are laid out into the same region. The step is
//! all-or-nothing: children are advanced on copies, and the copies replace
//! the originals only when every child produced a piece.

use super::{next_in, Fragment, LayoutCursor, Next, Placement};
use crate::geometry::{Position, Size};
use crate::model::Align;

#[derive(Debug, Clone)]
pub struct LayerCursor<C> {
    entries: Vec<(C, Align)>,
}

impl<C: LayoutCursor> LayerCursor<C> {
    pub fn new(entries: Vec<(C, Align)>) -> Self {
        Self { entries }
    }

    fn live_max(&self, size_of: impl Fn(&C) -> Size) -> Size {
        self.entries
            .iter()
            .filter(|(c, _)| c.has_next())
            .fold(Size::ZERO, |acc, (c, _)| acc.max(size_of(c)))
    }
}

impl<C: LayoutCursor> LayoutCursor for LayerCursor<C> {
    fn has_next(&self) -> bool {
        self.entries.iter().any(|(c, _)| c.has_next())
    }

    fn minimum_size(&self) -> Size {
        self.live_max(|c| c.minimum_size())
    }

    fn preferred_size(&self) -> Size {
        self.live_max(|c| c.preferred_size())
    }

    fn next(&mut self, width: i32, height: i32) -> Next {
        if !self.has_next() {
            return Next::NoFit;
        }

        let mut trial = self.entries.clone();
        let mut pieces = Vec::with_capacity(trial.len());
        for (cursor, align) in trial.iter_mut() {
            if !cursor.has_next() {
                continue;
            }
            match next_in(cursor, width, height) {
                Next::Fragment(f) => pieces.push((f, *align)),
                Next::NoFit => {
                    log::trace!("layer: a child does not fit {}x{}", width, height);
                    return Next::NoFit;
                }
            }
        }

        let size = pieces
            .iter()
            .fold(Size::ZERO, |acc, (f, _)| acc.max(f.size()));
        let children = pieces
            .into_iter()
            .map(|(fragment, align)| Placement {
                position: Position::new(align.place(size.width, fragment.size().width, 0), 0),
                fragment,
            })
            .collect();

        self.entries = trial;
        Next::Fragment(Fragment::composite(size, children))
    }
}
