#![forbid(unsafe_code)]

//! Contextual action menus.
//!
//! At most one context menu is live at a time: opening a second replaces
//! the first. Invoking an item returns its effect for the host to perform
//! and closes the menu in the same call — an action handler cannot forget
//! to close. Any primary interaction outside the menu's rendered region
//! closes it too.

use canopy_core::geometry::{Point, Rect};

use crate::tree::TreeNode;

/// Effect an invoked menu item asks the host to perform.
///
/// Effects are fire-and-forget from the menu's point of view: whatever the
/// collaborator does with one (and whether it succeeds), the menu is
/// already closed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum MenuEffect {
    /// Create a child under the target folder.
    CreateChild {
        /// Id of the folder that gets the new child.
        parent_id: String,
    },
    /// Delete the target node.
    Delete {
        /// Id of the node to delete.
        id: String,
    },
}

/// A single entry in a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
    effect: MenuEffect,
    enabled: bool,
}

impl MenuItem {
    /// Create an enabled item.
    #[must_use]
    pub fn new(label: impl Into<String>, effect: MenuEffect) -> Self {
        Self {
            label: label.into(),
            effect,
            enabled: true,
        }
    }

    /// Enable or disable the item. Disabled items render greyed out and
    /// ignore invocation.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The item's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The effect invoking this item produces.
    #[must_use]
    pub const fn effect(&self) -> &MenuEffect {
        &self.effect
    }

    /// Whether the item responds to invocation.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// The live menu: where it is, which node it targets, what it offers.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    position: Point,
    target_id: String,
    items: Vec<MenuItem>,
}

impl ContextMenu {
    /// Screen position of the menu's top-left corner, as given to
    /// [`ContextMenuController::open_at`].
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Id of the node the menu targets.
    #[must_use]
    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    /// The menu's items, in render order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// Tracks the at-most-one live context menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenuController {
    menu: Option<ContextMenu>,
}

impl ContextMenuController {
    /// Create a controller with no menu open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a menu for `node` at `position`, replacing any live menu.
    ///
    /// Folders offer "New File" then "Delete"; files offer "Delete" only.
    pub fn open_at(&mut self, position: Point, node: &TreeNode) {
        let replaced = self.menu.is_some();
        self.menu = Some(ContextMenu {
            position,
            target_id: node.id().to_owned(),
            items: Self::items_for(node),
        });
        tracing::debug!(message = "menu.open", target_id = node.id(), replaced);
    }

    /// Open a menu with a caller-supplied item list, replacing any live
    /// menu. For hosts whose actions don't derive from a node kind (e.g. a
    /// window menu with conditionally disabled entries).
    pub fn open_with_items(
        &mut self,
        position: Point,
        target_id: impl Into<String>,
        items: Vec<MenuItem>,
    ) {
        let replaced = self.menu.is_some();
        let target_id = target_id.into();
        tracing::debug!(message = "menu.open", target_id = target_id.as_str(), replaced);
        self.menu = Some(ContextMenu {
            position,
            target_id,
            items,
        });
    }

    fn items_for(node: &TreeNode) -> Vec<MenuItem> {
        let mut items = Vec::new();
        if node.is_folder() {
            items.push(MenuItem::new(
                "New File",
                MenuEffect::CreateChild {
                    parent_id: node.id().to_owned(),
                },
            ));
        }
        items.push(MenuItem::new(
            "Delete",
            MenuEffect::Delete {
                id: node.id().to_owned(),
            },
        ));
        items
    }

    /// The live menu, if any.
    #[must_use]
    pub const fn menu(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    /// Whether a menu is live.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.menu.is_some()
    }

    /// Close the live menu, if any.
    pub fn close(&mut self) {
        if self.menu.take().is_some() {
            tracing::debug!(message = "menu.close");
        }
    }

    /// Invoke the item at `index`.
    ///
    /// Returns the item's effect for the host to perform; the menu is
    /// closed before this returns, whatever the collaborator later does
    /// with the effect. Disabled items and out-of-range indexes return
    /// `None` and leave the menu as it was.
    pub fn invoke(&mut self, index: usize) -> Option<MenuEffect> {
        let item = self.menu.as_ref()?.items.get(index)?;
        if !item.is_enabled() {
            return None;
        }
        let effect = item.effect().clone();
        self.menu = None;
        tracing::debug!(message = "menu.invoke", index);
        Some(effect)
    }

    /// Forward a global primary pointer-down. `menu_rect` is the menu's
    /// rendered region as measured by the host; a press outside it closes
    /// the menu. Returns whether the menu closed.
    pub fn pointer_down(&mut self, position: Point, menu_rect: Rect) -> bool {
        if self.menu.is_some() && !menu_rect.contains(position) {
            self.close();
            return true;
        }
        false
    }
}
