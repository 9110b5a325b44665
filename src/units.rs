//! # Units
//!
//! Content is described in points (1/72 inch) so that it means the same thing
//! on a 96 dpi screen preview and on a 600 dpi printer. Cursors work in
//! device units: once a cursor is bound to a device, every length it
//! negotiates is a whole number of dots on that device.
//!
//! Horizontal and vertical resolutions are independent. Some printers have
//! non-square dots.

use serde::{Deserialize, Serialize};

use crate::geometry::{Position, Size};

/// Points in one inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert a length in points to device units at `dpi`, rounded to the
/// nearest unit. Zero and negative inputs stay zero and negative; lengths
/// beyond the `i32` range saturate.
pub fn points_to_device(points: f64, dpi: f64) -> i32 {
    (points * dpi / POINTS_PER_INCH).round() as i32
}

/// Convert a length in device units at `dpi` back to points.
pub fn device_to_points(units: i32, dpi: f64) -> f64 {
    units as f64 * POINTS_PER_INCH / dpi
}

/// Dots per inch of a rendering device, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub x: f64,
    pub y: f64,
}

impl Resolution {
    /// One device unit per point. Handy for tests and for PDF-like targets.
    pub const POINTS: Resolution = Resolution { x: 72.0, y: 72.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn uniform(dpi: f64) -> Self {
        Self { x: dpi, y: dpi }
    }

    /// Horizontal length in points → device units.
    pub fn horizontal(&self, points: f64) -> i32 {
        points_to_device(points, self.x)
    }

    /// Vertical length in points → device units.
    pub fn vertical(&self, points: f64) -> i32 {
        points_to_device(points, self.y)
    }

    pub fn size(&self, width: f64, height: f64) -> Size {
        Size::new(self.horizontal(width), self.vertical(height))
    }

    pub fn position(&self, x: f64, y: f64) -> Position {
        Position::new(self.horizontal(x), self.vertical(y))
    }

    /// Device size → (width, height) in points.
    pub fn to_points(&self, size: Size) -> (f64, f64) {
        (
            device_to_points(size.width, self.x),
            device_to_points(size.height, self.y),
        )
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::POINTS
    }
}
