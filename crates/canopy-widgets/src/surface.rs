#![forbid(unsafe_code)]

//! Floating-surface lifecycle.
//!
//! [`SurfaceHost`] wires a trigger, the placement math, and visibility
//! into one open/closed state machine. While open it holds a subscription
//! token from its [`RenderHost`]; the token is dropped on every exit from
//! `open` — repeated trigger, outside pointer, explicit close, or drop of
//! the whole host widget — so listeners can never outlive visibility.
//!
//! The rendering host owns measurement and the actual listener machinery.
//! It forwards observed events to [`SurfaceHost::handle_event`] for as
//! long as the token it handed out is alive.

use std::fmt;
use std::mem;

use canopy_core::event::{ViewportEvent, ViewportEvents};
use canopy_core::geometry::{Point, Rect, Size};

use crate::placement::{Align, Side, place};

/// Measurement and subscription services a rendering host provides.
///
/// Measurements are taken on demand, never cached: the anchor moves with
/// layout and the surface may resize while open.
pub trait RenderHost {
    /// RAII subscription token. Dropping it releases the host-side
    /// listeners for the events it was acquired with.
    type Subscription;

    /// Current bounding rect of the trigger element.
    fn anchor_rect(&self) -> Rect;

    /// Current rendered size of the floating surface.
    fn surface_size(&self) -> Size;

    /// Current viewport size.
    fn viewport(&self) -> Size;

    /// Begin observing `events`, forwarding each to the surface until the
    /// returned token is dropped.
    fn subscribe(&mut self, events: ViewportEvents) -> Self::Subscription;
}

/// Placement configuration for one floating surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SurfaceConfig {
    /// Which side of the anchor the surface attaches to.
    pub side: Side,
    /// Alignment along the anchor for top/bottom sides.
    pub align: Align,
}

impl SurfaceConfig {
    /// Create a config with the given side and the default alignment.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            align: Align::default(),
        }
    }

    /// Set the alignment.
    #[must_use]
    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

enum SurfaceState<S> {
    Closed,
    Open {
        position: Point,
        /// Listener lifetime: alive exactly as long as this variant.
        _subscription: S,
    },
}

/// Open/closed state machine for one floating surface.
pub struct SurfaceHost<H: RenderHost> {
    host: H,
    config: SurfaceConfig,
    state: SurfaceState<H::Subscription>,
}

impl<H: RenderHost> fmt::Debug for SurfaceHost<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceHost")
            .field("config", &self.config)
            .field("open", &self.is_open())
            .field("position", &self.position())
            .finish()
    }
}

impl<H: RenderHost> SurfaceHost<H> {
    /// Events observed while open.
    const OPEN_EVENTS: ViewportEvents = ViewportEvents::RESIZE
        .union(ViewportEvents::SCROLL)
        .union(ViewportEvents::POINTER_DOWN);

    /// Create a closed surface with default placement (below, centered).
    pub fn new(host: H) -> Self {
        Self::with_config(host, SurfaceConfig::default())
    }

    /// Create a closed surface with the given placement.
    pub fn with_config(host: H, config: SurfaceConfig) -> Self {
        Self {
            host,
            config,
            state: SurfaceState::Closed,
        }
    }

    /// The placement configuration.
    #[must_use]
    pub const fn config(&self) -> SurfaceConfig {
        self.config
    }

    /// Borrow the rendering host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the rendering host.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether the surface is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, SurfaceState::Open { .. })
    }

    /// Current surface position, while open.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self.state {
            SurfaceState::Open { position, .. } => Some(position),
            SurfaceState::Closed => None,
        }
    }

    /// Trigger interaction: open if closed, close if open.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the surface: measure, place, and begin observing the
    /// viewport. No-op while already open.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        let position = self.compute_position();
        let subscription = self.host.subscribe(Self::OPEN_EVENTS);
        self.state = SurfaceState::Open {
            position,
            _subscription: subscription,
        };
        tracing::debug!(message = "surface.open", top = position.top, left = position.left);
    }

    /// Close the surface, releasing the subscription. No-op while closed.
    pub fn close(&mut self) {
        if let SurfaceState::Open { .. } = mem::replace(&mut self.state, SurfaceState::Closed) {
            // Token dropped with the replaced state.
            tracing::debug!(message = "surface.close");
        }
    }

    /// Forward one observed event.
    ///
    /// Resize and scroll re-measure the anchor and surface and re-place;
    /// a pointer-down outside both the surface and the anchor closes.
    pub fn handle_event(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Resized | ViewportEvent::Scrolled => self.reposition(),
            ViewportEvent::PointerDown(position) => self.pointer_down(position),
        }
    }

    /// Re-measure and re-place while open.
    pub fn reposition(&mut self) {
        if !self.is_open() {
            return;
        }
        let position = self.compute_position();
        if let SurfaceState::Open {
            position: current, ..
        } = &mut self.state
        {
            *current = position;
        }
        tracing::trace!(
            message = "surface.reposition",
            top = position.top,
            left = position.left
        );
    }

    /// Global primary pointer-down. A press inside the surface is the
    /// user interacting with its content; a press inside the anchor is
    /// the trigger's own toggle. Anything else closes.
    pub fn pointer_down(&mut self, position: Point) {
        let Some(surface_position) = self.position() else {
            return;
        };
        let surface_rect = Rect::from_point_size(surface_position, self.host.surface_size());
        if surface_rect.contains(position) || self.host.anchor_rect().contains(position) {
            return;
        }
        self.close();
    }

    fn compute_position(&self) -> Point {
        place(
            self.host.anchor_rect(),
            self.host.surface_size(),
            self.config.side,
            self.config.align,
            self.host.viewport(),
        )
    }
}
