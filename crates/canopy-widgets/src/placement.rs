#![forbid(unsafe_code)]

//! Anchor-relative placement for floating surfaces.
//!
//! [`place`] computes where a floating surface (dropdown, tooltip, menu)
//! goes relative to the bounding rect of the element that opened it, then
//! runs the result through [`clamp_left`] so it stays inside the viewport.
//!
//! Clamping is horizontal only, and only for [`Side::Top`] /
//! [`Side::Bottom`] placements; left/right placements are emitted exactly
//! as computed and vertical overflow is never adjusted. Current behavior,
//! pinned by tests.

use canopy_core::geometry::{Point, Rect, Size};

/// Which side of the anchor the surface attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor (default).
    #[default]
    Bottom,
    /// To the left of the anchor, top edges aligned.
    Left,
    /// To the right of the anchor, top edges aligned.
    Right,
}

impl Side {
    /// Whether this side aligns and clamps along the horizontal axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Horizontal alignment against the anchor, for top/bottom placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Align {
    /// Left edges aligned.
    Start,
    /// Centers aligned (default).
    #[default]
    Center,
    /// Right edges aligned.
    End,
}

/// Clamp a horizontal span into the viewport.
///
/// Returns `0.0` when the span starts left of the viewport, shifts it left
/// when it overruns the right edge, and passes it through unchanged
/// otherwise. Pure and total over finite inputs.
#[inline]
#[must_use]
pub fn clamp_left(candidate_left: f64, candidate_width: f64, viewport_width: f64) -> f64 {
    if candidate_left < 0.0 {
        0.0
    } else if candidate_left + candidate_width > viewport_width {
        viewport_width - candidate_width
    } else {
        candidate_left
    }
}

/// Compute the surface position for an anchor, side, and alignment.
///
/// Returns the surface's top-left corner in viewport coordinates.
/// Degenerate (zero or negative) surface dimensions are treated as zero,
/// which collapses the placement onto the anchor's own edge rather than
/// failing.
#[must_use]
pub fn place(anchor: Rect, surface: Size, side: Side, align: Align, viewport: Size) -> Point {
    let width = surface.width.max(0.0);
    let height = surface.height.max(0.0);

    match side {
        Side::Left => Point {
            top: anchor.top,
            left: anchor.left - width,
        },
        Side::Right => Point {
            top: anchor.top,
            left: anchor.right(),
        },
        Side::Top | Side::Bottom => {
            let top = match side {
                Side::Top => anchor.top - height,
                _ => anchor.bottom(),
            };
            let left = match align {
                Align::Start => anchor.left,
                Align::Center => anchor.left + (anchor.width - width) / 2.0,
                Align::End => anchor.right() - width,
            };
            Point {
                top,
                left: clamp_left(left, width, viewport.width),
            }
        }
    }
}
