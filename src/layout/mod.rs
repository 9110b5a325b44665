//! # Lazy Layout
//!
//! Layout in Folio is a negotiation, not a pass. A cursor is bound to one
//! node and one device, and answers four questions:
//!
//! 1. Is there anything left? ([`LayoutCursor::has_next`])
//! 2. What is the smallest region that can hold *some* of it?
//!    ([`LayoutCursor::minimum_size`])
//! 3. How big would it be with no constraint?
//!    ([`LayoutCursor::preferred_size`])
//! 4. Give me the next piece that fits in `width` x `height`.
//!    ([`LayoutCursor::next`])
//!
//! The answer to the last one is a [`Next`]: either a [`Fragment`] or
//! [`Next::NoFit`]. `NoFit` is the normal way to say "this region is too
//! small, try the next page". It is never folded into an empty fragment,
//! because an empty fragment is a legitimate result.
//!
//! Cursors only move forward. To try a region without committing, copy the
//! cursor, advance the copy, and throw it away if the result is unwanted;
//! the original is untouched.
//!
//! Decorator cursors are generic over their child, so any type implementing
//! [`LayoutCursor`] can be wrapped, not only the built-in [`Cursor`].

pub mod empty;
pub mod fragment;
pub mod layer;
pub mod max_size;
pub mod min_size;
pub mod offset;
pub mod padding;
pub mod text;

use crate::geometry::Size;
use crate::model::Node;
use crate::text::TextMeasure;
use crate::units::Resolution;

pub use empty::EmptyCursor;
pub use fragment::{Fragment, FragmentContent, Placement, TextLine};
pub use layer::LayerCursor;
pub use max_size::MaxSizeCursor;
pub use min_size::MinSizeCursor;
pub use offset::OffsetCursor;
pub use padding::PaddingCursor;
pub use text::TextCursor;

/// What a cursor needs to know about the device it lays out for.
///
/// Owned by the driver and passed by value; cursors keep the resolution they
/// were built with and a shared reference to the measurer.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub resolution: Resolution,
    pub measure: &'a dyn TextMeasure,
}

impl<'a> RenderContext<'a> {
    pub fn new(resolution: Resolution, measure: &'a dyn TextMeasure) -> Self {
        Self {
            resolution,
            measure,
        }
    }
}

/// Outcome of asking a cursor for its next piece.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Next {
    /// A piece that fits the offered region.
    Fragment(Fragment),
    /// Nothing fits in the offered region. Not an error.
    NoFit,
}

impl Next {
    pub fn is_fragment(&self) -> bool {
        matches!(self, Next::Fragment(_))
    }

    pub fn is_no_fit(&self) -> bool {
        matches!(self, Next::NoFit)
    }

    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            Next::Fragment(f) => Some(f),
            Next::NoFit => None,
        }
    }

    pub fn into_fragment(self) -> Option<Fragment> {
        match self {
            Next::Fragment(f) => Some(f),
            Next::NoFit => None,
        }
    }

    /// Transform a fragment, passing `NoFit` through untouched.
    pub fn map<F>(self, f: F) -> Next
    where
        F: FnOnce(Fragment) -> Fragment,
    {
        match self {
            Next::Fragment(fragment) => Next::Fragment(f(fragment)),
            Next::NoFit => Next::NoFit,
        }
    }
}

/// The negotiation protocol every content kind implements.
///
/// All sizes are in device units.
pub trait LayoutCursor: Clone {
    /// Whether a further [`next`](LayoutCursor::next) could produce
    /// something. It may still not fit the region offered.
    fn has_next(&self) -> bool;

    /// The smallest region into which some non-empty content could be
    /// placed. Drivers use it to spot pages that can never make progress.
    fn minimum_size(&self) -> Size;

    /// The size the remaining content would take with no constraint.
    fn preferred_size(&self) -> Size;

    /// Lay out the next chunk into at most `width` x `height`.
    fn next(&mut self, width: i32, height: i32) -> Next;

    /// An independent cursor at the same point in the content.
    fn copy(&self) -> Self {
        self.clone()
    }
}

/// Ask `cursor` for its next piece, refusing outright when the region has a
/// negative extent. Decorators reach their children through this, since
/// subtracting insets from a small region can go below zero.
pub fn next_in<C: LayoutCursor>(cursor: &mut C, width: i32, height: i32) -> Next {
    if width < 0 || height < 0 {
        log::trace!("no fit: negative region {}x{}", width, height);
        return Next::NoFit;
    }
    cursor.next(width, height)
}

/// The cursor for any [`Node`]: one variant per node kind.
#[derive(Debug, Clone)]
pub enum Cursor<'a> {
    Empty(EmptyCursor),
    Text(TextCursor<'a>),
    Layer(LayerCursor<Cursor<'a>>),
    Offset(Box<OffsetCursor<Cursor<'a>>>),
    Padding(Box<PaddingCursor<Cursor<'a>>>),
    MaxSize(Box<MaxSizeCursor<Cursor<'a>>>),
    MinSize(Box<MinSizeCursor<Cursor<'a>>>),
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            Cursor::Empty($c) => $body,
            Cursor::Text($c) => $body,
            Cursor::Layer($c) => $body,
            Cursor::Offset($c) => $body,
            Cursor::Padding($c) => $body,
            Cursor::MaxSize($c) => $body,
            Cursor::MinSize($c) => $body,
        }
    };
}

impl LayoutCursor for Cursor<'_> {
    fn has_next(&self) -> bool {
        dispatch!(self, c => c.has_next())
    }

    fn minimum_size(&self) -> Size {
        dispatch!(self, c => c.minimum_size())
    }

    fn preferred_size(&self) -> Size {
        dispatch!(self, c => c.preferred_size())
    }

    fn next(&mut self, width: i32, height: i32) -> Next {
        dispatch!(self, c => c.next(width, height))
    }
}

impl Node {
    /// Start laying out this node for the device described by `ctx`.
    ///
    /// Every point-based parameter in the tree is converted to device units
    /// here, once.
    pub fn cursor<'a>(&'a self, ctx: RenderContext<'a>) -> Cursor<'a> {
        let res = ctx.resolution;
        match self {
            Node::Empty(n) => Cursor::Empty(EmptyCursor::new(res.size(n.width(), n.height()))),
            Node::Text(n) => Cursor::Text(TextCursor::new(n, ctx)),
            Node::Layer(n) => Cursor::Layer(LayerCursor::new(
                n.children
                    .iter()
                    .map(|entry| (entry.node.cursor(ctx), entry.align))
                    .collect(),
            )),
            Node::Offset(n) => {
                let (dx, dy) = n.displacement();
                Cursor::Offset(Box::new(OffsetCursor::new(
                    n.target().cursor(ctx),
                    n.h_align(),
                    n.v_align(),
                    res.position(dx, dy),
                )))
            }
            Node::Padding(n) => {
                let p = n.padding();
                Cursor::Padding(Box::new(PaddingCursor::new(
                    n.target().cursor(ctx),
                    res.horizontal(p.left),
                    res.vertical(p.top),
                    res.horizontal(p.right),
                    res.vertical(p.bottom),
                )))
            }
            Node::MaxSize(n) => Cursor::MaxSize(Box::new(MaxSizeCursor::new(
                n.target().cursor(ctx),
                n.max_width().map(|w| res.horizontal(w)),
                n.max_height().map(|h| res.vertical(h)),
            ))),
            Node::MinSize(n) => Cursor::MinSize(Box::new(MinSizeCursor::new(
                n.target().cursor(ctx),
                res.size(n.min_width(), n.min_height()),
            ))),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! A scripted leaf for exercising decorators in isolation.

    use super::*;

    /// Produces fixed-size pieces from a list, refusing any region smaller
    /// than the current one.
    #[derive(Debug, Clone)]
    pub struct Script {
        pub pieces: Vec<Size>,
        pub at: usize,
        /// Regions this cursor (or any copy made after it) was offered.
        pub offered: std::rc::Rc<std::cell::RefCell<Vec<Size>>>,
    }

    impl Script {
        pub fn new(pieces: &[Size]) -> Self {
            Self {
                pieces: pieces.to_vec(),
                at: 0,
                offered: Default::default(),
            }
        }

        pub fn offered(&self) -> Vec<Size> {
            self.offered.borrow().clone()
        }
    }

    impl LayoutCursor for Script {
        fn has_next(&self) -> bool {
            self.at < self.pieces.len()
        }

        fn minimum_size(&self) -> Size {
            self.pieces.get(self.at).copied().unwrap_or(Size::ZERO)
        }

        fn preferred_size(&self) -> Size {
            self.minimum_size()
        }

        fn next(&mut self, width: i32, height: i32) -> Next {
            self.offered.borrow_mut().push(Size::new(width, height));
            match self.pieces.get(self.at) {
                Some(size) if size.fits_in(Size::new(width, height)) => {
                    self.at += 1;
                    Next::Fragment(Fragment::blank(*size))
                }
                _ => Next::NoFit,
            }
        }
    }
}
