#![forbid(unsafe_code)]

//! Viewport-event vocabulary.
//!
//! A floating surface asks its rendering host to observe a set of
//! viewport-level events while it is open ([`ViewportEvents`]) and receives
//! them back one at a time ([`ViewportEvent`]). The host owns the actual
//! listener machinery; the mask and payload types here are the whole
//! contract.

use bitflags::bitflags;

use crate::geometry::Point;

bitflags! {
    /// Which viewport-level events a subscription observes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewportEvents: u8 {
        /// The viewport was resized.
        const RESIZE = 1 << 0;
        /// The viewport, or an ancestor scroll container, scrolled.
        const SCROLL = 1 << 1;
        /// A primary pointer went down anywhere in the viewport.
        const POINTER_DOWN = 1 << 2;
    }
}

/// One event forwarded by the host while a subscription is live.
///
/// Resize and scroll carry no payload: consumers re-measure through the
/// host on demand rather than trusting a stale snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// The viewport was resized.
    Resized,
    /// The viewport (or an ancestor scroll container) scrolled.
    Scrolled,
    /// A primary pointer went down at the given viewport position.
    PointerDown(Point),
}

impl ViewportEvent {
    /// The mask bit this event corresponds to.
    #[must_use]
    pub const fn kind(&self) -> ViewportEvents {
        match self {
            Self::Resized => ViewportEvents::RESIZE,
            Self::Scrolled => ViewportEvents::SCROLL,
            Self::PointerDown(_) => ViewportEvents::POINTER_DOWN,
        }
    }
}
