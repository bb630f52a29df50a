#![forbid(unsafe_code)]

//! Core primitives for the canopy widget engine.
//!
//! Geometry types in viewport coordinates and the viewport-event vocabulary
//! shared between floating surfaces and their rendering hosts. Nothing here
//! renders; rendering belongs to the embedding host.

pub mod event;
pub mod geometry;

pub use event::{ViewportEvent, ViewportEvents};
pub use geometry::{Point, Rect, Size};
