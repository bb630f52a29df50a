#![forbid(unsafe_code)]

//! State-and-geometry engine for disclosure widgets.
//!
//! The building blocks of a desktop editor's interactive chrome:
//! collapsible sections, hierarchical content trees, contextual menus, and
//! anchored floating surfaces. Everything here is headless — widgets own
//! their open/closed/selection state and, for floating surfaces, their
//! screen position, while rendering and real event listeners belong to the
//! embedding host (see [`surface::RenderHost`]).
//!
//! All state transitions are synchronous and atomic with respect to the
//! interaction that caused them; instances share nothing with each other.

pub mod disclosure;
pub mod menu;
pub mod placement;
pub mod surface;
pub mod tree;

pub use disclosure::{DisclosureController, DisclosureMode, DisclosureSnapshot};
pub use menu::{ContextMenu, ContextMenuController, MenuEffect, MenuItem};
pub use placement::{Align, Side, clamp_left, place};
pub use surface::{RenderHost, SurfaceConfig, SurfaceHost};
pub use tree::{NodeKind, TreeEvent, TreeLayout, TreeNode, TreeRow, TreeState, TreeViewState, from_paths};
