//! Pointer geometry for resize drags
//!
//! Pure maths used while a split's resize handle is being dragged, kept free
//! of any UI toolkit so it can be property-tested.

use crate::split::{MAX_DIVISION, MIN_DIVISION, Orientation};

/// A pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The bounding box of a split's element, in the same coordinates as [`Point`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width (must be positive to be usable).
    pub width: f64,
    /// Height (must be positive to be usable).
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Calculates the division for a pointer inside a split's bounding box.
///
/// For `Row` splits the ratio is taken along the horizontal axis, for
/// `Column` splits along the vertical axis. The result is clamped to
/// `[0, 1]`, so a pointer dragged outside the box pins the division to an
/// edge.
///
/// Returns `None` when the extent along the axis is zero, negative or not
/// finite, or when the pointer coordinate is not finite.
#[must_use]
pub fn division_at(orientation: Orientation, bounds: Rect, pointer: Point) -> Option<f64> {
    let (position, start, extent) = match orientation {
        Orientation::Row => (pointer.x, bounds.left, bounds.width),
        Orientation::Column => (pointer.y, bounds.top, bounds.height),
    };

    if !extent.is_finite() || extent <= 0.0 || !position.is_finite() || !start.is_finite() {
        return None;
    }

    let ratio = (position - start) / extent;
    ratio
        .is_finite()
        .then(|| ratio.clamp(MIN_DIVISION, MAX_DIVISION))
}
