#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are `f64` in viewport space (origin at the top-left,
//! y growing downward), as measured by the rendering host. Candidate
//! positions may legitimately be negative before clamping, so coordinates
//! are signed.

/// A position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Distance from the viewport's top edge.
    pub top: f64,
    /// Distance from the viewport's left edge.
    pub left: f64,
}

impl Point {
    /// Create a point.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// A measured width/height pair (a surface, a viewport).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle in viewport coordinates.
///
/// Serves both as the host-measured bounding rect of an anchor (trigger)
/// element and as the hit-test region of a rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Create a rectangle from a position and a size.
    #[inline]
    #[must_use]
    pub const fn from_point_size(origin: Point, size: Size) -> Self {
        Self {
            top: origin.top,
            left: origin.left,
            width: size.width,
            height: size.height,
        }
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The rectangle's extent.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether a point falls inside the rectangle.
    ///
    /// Edges are inclusive on the top/left and exclusive on the
    /// bottom/right. An empty rectangle contains nothing.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.left >= self.left
            && point.left < self.right()
            && point.top >= self.top
            && point.top < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(100.0, 50.0, 80.0, 20.0);
        assert_eq!(rect.right(), 130.0);
        assert_eq!(rect.bottom(), 120.0);
        assert_eq!(rect.size(), Size::new(80.0, 20.0));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(19.9, 19.9)));
        assert!(!rect.contains(Point::new(20.0, 10.0)));
        assert!(!rect.contains(Point::new(10.0, 20.0)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let rect = Rect::new(5.0, 5.0, 0.0, 10.0);
        assert!(rect.is_empty());
        assert!(!rect.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn degenerate_sizes() {
        assert!(Size::new(0.0, 4.0).is_degenerate());
        assert!(Size::new(4.0, -1.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }
}
