//! Device-unit geometry shared by cursors and fragments.

use serde::Serialize;

/// A width and height in device units.
///
/// Arithmetic saturates at the `i32` range, so absurdly large content reports
/// a size no region can hold instead of wrapping around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow both axes by the given amounts.
    pub fn expand(self, dx: i32, dy: i32) -> Self {
        Size::new(self.width.saturating_add(dx), self.height.saturating_add(dy))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Self {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// True when `self` fits inside `other` on both axes.
    pub fn fits_in(self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    pub(crate) fn non_negative(self) -> Self {
        Size::new(self.width.max(0), self.height.max(0))
    }
}

/// An offset from a fragment's origin, in device units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, by: Position) -> Self {
        Position::new(self.x.saturating_add(by.x), self.y.saturating_add(by.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_is_component_wise() {
        let a = Size::new(100, 5);
        let b = Size::new(20, 50);
        assert_eq!(a.max(b), Size::new(100, 50));
    }

    #[test]
    fn fits_in_checks_both_axes() {
        assert!(Size::new(10, 10).fits_in(Size::new(10, 10)));
        assert!(!Size::new(11, 10).fits_in(Size::new(10, 10)));
        assert!(!Size::new(10, 11).fits_in(Size::new(10, 10)));
    }

    #[test]
    fn expand_saturates() {
        let huge = Size::new(i32::MAX, i32::MAX - 5);
        assert_eq!(huge.expand(20, 20), Size::new(i32::MAX, i32::MAX));
        assert!(!huge.expand(1, 1).fits_in(Size::new(1000, 1000)));
    }

    #[test]
    fn translate_saturates() {
        let p = Position::new(i32::MAX - 1, 0).translate(Position::new(10, 3));
        assert_eq!(p, Position::new(i32::MAX, 3));
    }

    #[test]
    fn translate_adds_offsets() {
        let p = Position::new(3, 4).translate(Position::new(10, -2));
        assert_eq!(p, Position::new(13, 2));
    }
}
