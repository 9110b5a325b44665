//! # Folio
//!
//! A lazy pagination layout engine.
//!
//! Most layout engines want to know the page before they start. Folio never
//! does. Content is described once as an immutable tree of [`Node`]s, and a
//! [`Cursor`] negotiates with whoever drives it: "how small can you get?",
//! "how big would you like to be?", and finally "give me the next piece that
//! fits in *this* rectangle". When nothing fits the answer is
//! [`Next::NoFit`], which is not an error. It is how the driver learns that a
//! page is full.
//!
//! ## Architecture
//!
//! ```text
//! Content (JSON/API)
//!       ↓
//!   [model]    — Immutable node tree: leaves and decorators, in points
//!       ↓
//!   [layout]   — Cursors: size negotiation and fragment production,
//!                in device units (see [units])
//!       ↓
//!   [paint]    — Fragments relocate children; leaves draw on a Surface
//! ```
//!
//! Cursors can be copied at any point with [`LayoutCursor::copy`], which is
//! what makes trial layout possible: measure on a copy, commit on the
//! original.

pub mod config;
pub mod error;
pub mod geometry;
pub mod job;
pub mod layout;
pub mod model;
pub mod paint;
pub mod text;
pub mod units;

pub use error::{FolioError, LayoutError};
pub use geometry::{Position, Size};
pub use job::{render, render_json, Job, RegionDump};
pub use layout::fragment::{Fragment, FragmentContent, Placement, TextLine};
pub use layout::{next_in, Cursor, LayoutCursor, Next, RenderContext};
pub use model::{Align, Edges, Node};
pub use paint::{DisplayList, DrawCommand, Surface};
pub use text::{MonospaceMetrics, TextMeasure, TextStyle};
pub use units::Resolution;
