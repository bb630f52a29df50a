//! Subscription-lifecycle checks for floating surfaces.
//!
//! Entering `open` acquires exactly one subscription; every exit path —
//! trigger toggle, outside pointer, explicit close, drop of the host
//! widget — releases it synchronously. A counting mock host catches any
//! leak.

use std::cell::Cell;
use std::rc::Rc;

use canopy_core::event::{ViewportEvent, ViewportEvents};
use canopy_core::geometry::{Point, Rect, Size};
use canopy_widgets::{RenderHost, SurfaceHost};

#[derive(Clone, Default)]
struct Counters {
    acquired: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
}

impl Counters {
    fn active(&self) -> usize {
        self.acquired.get() - self.released.get()
    }
}

struct CountingHost {
    counters: Counters,
}

struct Subscription {
    released: Rc<Cell<usize>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

impl CountingHost {
    fn new(counters: &Counters) -> Self {
        Self {
            counters: counters.clone(),
        }
    }
}

impl RenderHost for CountingHost {
    type Subscription = Subscription;

    fn anchor_rect(&self) -> Rect {
        Rect::new(10.0, 10.0, 40.0, 16.0)
    }

    fn surface_size(&self) -> Size {
        Size::new(120.0, 80.0)
    }

    fn viewport(&self) -> Size {
        Size::new(640.0, 480.0)
    }

    fn subscribe(&mut self, events: ViewportEvents) -> Subscription {
        assert!(events.contains(ViewportEvents::RESIZE));
        assert!(events.contains(ViewportEvents::SCROLL));
        assert!(events.contains(ViewportEvents::POINTER_DOWN));
        self.counters.acquired.set(self.counters.acquired.get() + 1);
        Subscription {
            released: Rc::clone(&self.counters.released),
        }
    }
}

fn open_surface(counters: &Counters) -> SurfaceHost<CountingHost> {
    let mut surface = SurfaceHost::new(CountingHost::new(counters));
    surface.open();
    surface
}

#[test]
fn toggle_exit_releases_the_token() {
    let counters = Counters::default();
    let mut surface = open_surface(&counters);
    assert_eq!(counters.active(), 1);
    surface.toggle();
    assert_eq!(counters.active(), 0);
    assert_eq!(counters.acquired.get(), 1);
}

#[test]
fn explicit_close_releases_the_token() {
    let counters = Counters::default();
    let mut surface = open_surface(&counters);
    surface.close();
    assert_eq!(counters.active(), 0);
    // Closing again acquires and releases nothing.
    surface.close();
    assert_eq!(counters.acquired.get(), 1);
    assert_eq!(counters.released.get(), 1);
}

#[test]
fn outside_pointer_exit_releases_the_token() {
    let counters = Counters::default();
    let mut surface = open_surface(&counters);
    surface.handle_event(ViewportEvent::PointerDown(Point::new(400.0, 400.0)));
    assert!(!surface.is_open());
    assert_eq!(counters.active(), 0);
}

#[test]
fn drop_exit_releases_the_token() {
    let counters = Counters::default();
    let surface = open_surface(&counters);
    assert_eq!(counters.active(), 1);
    drop(surface);
    assert_eq!(counters.active(), 0);
}

#[test]
fn resize_and_scroll_do_not_churn_subscriptions() {
    let counters = Counters::default();
    let mut surface = open_surface(&counters);
    surface.handle_event(ViewportEvent::Resized);
    surface.handle_event(ViewportEvent::Scrolled);
    surface.handle_event(ViewportEvent::Resized);
    assert_eq!(counters.acquired.get(), 1);
    assert_eq!(counters.active(), 1);
}

#[test]
fn repeated_open_close_cycles_balance() {
    let counters = Counters::default();
    let mut surface = SurfaceHost::new(CountingHost::new(&counters));
    for _ in 0..3 {
        surface.toggle();
        surface.toggle();
    }
    assert_eq!(counters.acquired.get(), 3);
    assert_eq!(counters.released.get(), 3);
}

#[test]
fn pointer_inside_open_surface_holds_the_token() {
    let counters = Counters::default();
    let mut surface = open_surface(&counters);
    let inside = surface.position().unwrap();
    surface.handle_event(ViewportEvent::PointerDown(Point::new(
        inside.top + 1.0,
        inside.left + 1.0,
    )));
    assert!(surface.is_open());
    assert_eq!(counters.active(), 1);
}
