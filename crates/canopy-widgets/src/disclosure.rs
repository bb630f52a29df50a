#![forbid(unsafe_code)]

//! Open/closed state for groups of collapsible sections.
//!
//! One [`DisclosureController`] backs one group of disclosure widgets (an
//! accordion, a stack of panels). Widgets receive the controller by
//! reference at construction; there is no ambient lookup to fail at
//! runtime, so "used outside a group" is a compile error rather than a
//! crash.
//!
//! Every toggle replaces the open list wholesale and hands the new list to
//! the optional observer, so hosts can re-render off a single notification.

use std::fmt;

/// How many sections may be open at once, and whether the open one closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum DisclosureMode {
    /// Any number of sections open at once (default).
    #[default]
    Multiple,
    /// Exactly one section open; re-toggling it keeps it open.
    SinglePersistent,
    /// At most one section open; re-toggling the open one closes it.
    SingleCollapsible,
}

/// A serializable view of a controller's state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DisclosureSnapshot {
    /// The controller's mode.
    pub mode: DisclosureMode,
    /// Open section ids, in the order they were opened.
    pub open: Vec<String>,
}

type Observer = Box<dyn FnMut(&[String])>;

/// Owns the open set for one group of collapsible sections.
///
/// The open list preserves opening order. In the single modes its length
/// never exceeds one.
pub struct DisclosureController {
    mode: DisclosureMode,
    open: Vec<String>,
    observer: Option<Observer>,
}

impl fmt::Debug for DisclosureController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureController")
            .field("mode", &self.mode)
            .field("open", &self.open)
            .field("observer", &self.observer.as_ref().map(|_| ".."))
            .finish()
    }
}

impl DisclosureController {
    /// Create a controller with an empty open set.
    #[must_use]
    pub fn new(mode: DisclosureMode) -> Self {
        Self {
            mode,
            open: Vec::new(),
            observer: None,
        }
    }

    /// Create a controller with an initial open set.
    ///
    /// In the single modes only the first id is kept, preserving the
    /// at-most-one invariant.
    #[must_use]
    pub fn with_open<I, S>(mode: DisclosureMode, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut open: Vec<String> = initial.into_iter().map(Into::into).collect();
        if mode != DisclosureMode::Multiple {
            open.truncate(1);
        }
        Self {
            mode,
            open,
            observer: None,
        }
    }

    /// Install an observer called synchronously with the new open list
    /// after every toggle.
    #[must_use]
    pub fn on_change(mut self, observer: impl FnMut(&[String]) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The controller's mode.
    #[must_use]
    pub const fn mode(&self) -> DisclosureMode {
        self.mode
    }

    /// Whether the given section is open.
    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open| open == id)
    }

    /// Open section ids in opening order.
    #[must_use]
    pub fn open_ids(&self) -> &[String] {
        &self.open
    }

    /// A serializable snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> DisclosureSnapshot {
        DisclosureSnapshot {
            mode: self.mode,
            open: self.open.clone(),
        }
    }

    /// Toggle a section per the controller's mode.
    ///
    /// The open list is replaced wholesale and the observer (if any) fires
    /// with the new list — including after a `SinglePersistent` re-toggle,
    /// where the list is unchanged.
    pub fn toggle(&mut self, id: &str) {
        let next = match self.mode {
            DisclosureMode::Multiple => {
                if self.is_open(id) {
                    self.open.iter().filter(|open| *open != id).cloned().collect()
                } else {
                    let mut open = self.open.clone();
                    open.push(id.to_owned());
                    open
                }
            }
            DisclosureMode::SinglePersistent => vec![id.to_owned()],
            DisclosureMode::SingleCollapsible => {
                if self.open.len() == 1 && self.open[0] == id {
                    Vec::new()
                } else {
                    vec![id.to_owned()]
                }
            }
        };

        self.open = next;
        tracing::debug!(message = "disclosure.toggle", id, open = self.open.len());
        if let Some(observer) = &mut self.observer {
            observer(&self.open);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn multiple_toggle_pair_is_identity() {
        let mut group = DisclosureController::with_open(DisclosureMode::Multiple, ["a", "b"]);
        group.toggle("c");
        group.toggle("c");
        assert_eq!(group.open_ids(), ["a", "b"]);
    }

    #[test]
    fn multiple_preserves_opening_order() {
        let mut group = DisclosureController::new(DisclosureMode::Multiple);
        group.toggle("b");
        group.toggle("a");
        group.toggle("c");
        group.toggle("a");
        assert_eq!(group.open_ids(), ["b", "c"]);
    }

    #[test]
    fn single_persistent_retoggle_stays_open() {
        let mut group = DisclosureController::new(DisclosureMode::SinglePersistent);
        group.toggle("x");
        group.toggle("x");
        assert_eq!(group.open_ids(), ["x"]);
    }

    #[test]
    fn single_collapsible_retoggle_closes() {
        let mut group = DisclosureController::new(DisclosureMode::SingleCollapsible);
        group.toggle("a");
        assert_eq!(group.open_ids(), ["a"]);
        group.toggle("b");
        assert_eq!(group.open_ids(), ["b"]);
        group.toggle("b");
        assert!(group.open_ids().is_empty());
    }

    #[test]
    fn initial_open_truncated_in_single_modes() {
        let group = DisclosureController::with_open(DisclosureMode::SingleCollapsible, ["a", "b"]);
        assert_eq!(group.open_ids(), ["a"]);
    }

    #[test]
    fn observer_fires_with_each_new_list() {
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut group = DisclosureController::new(DisclosureMode::SingleCollapsible)
            .on_change(move |open| sink.borrow_mut().push(open.to_vec()));

        group.toggle("a");
        group.toggle("b");
        group.toggle("b");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], ["a"]);
        assert_eq!(seen[1], ["b"]);
        assert!(seen[2].is_empty());
    }

    #[test]
    fn observer_fires_on_persistent_retoggle() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut group = DisclosureController::new(DisclosureMode::SinglePersistent)
            .on_change(move |_| *sink.borrow_mut() += 1);

        group.toggle("x");
        group.toggle("x");
        assert_eq!(*count.borrow(), 2);
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn snapshot_round_trips_through_serde() {
        let mut group = DisclosureController::new(DisclosureMode::Multiple);
        group.toggle("a");
        group.toggle("b");
        let json = serde_json::to_string(&group.snapshot()).unwrap();
        let restored: DisclosureSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, group.snapshot());
    }

    proptest! {
        #[test]
        fn prop_single_modes_never_exceed_one(
            ids in prop::collection::vec("[a-d]", 0..20),
            collapsible in proptest::bool::ANY,
        ) {
            let mode = if collapsible {
                DisclosureMode::SingleCollapsible
            } else {
                DisclosureMode::SinglePersistent
            };
            let mut group = DisclosureController::new(mode);
            for id in &ids {
                group.toggle(id);
                prop_assert!(group.open_ids().len() <= 1);
            }
        }

        #[test]
        fn prop_multiple_toggle_twice_restores_membership(
            ids in prop::collection::vec("[a-d]", 0..10),
        ) {
            // Pairs of toggles cancel out as set membership; opening order
            // is not part of the law (a re-opened id moves to the end).
            let mut group = DisclosureController::with_open(DisclosureMode::Multiple, ["a", "c"]);
            let mut before = group.open_ids().to_vec();
            for id in ids.iter().chain(ids.iter().rev()) {
                group.toggle(id);
            }
            let mut after = group.open_ids().to_vec();
            before.sort();
            after.sort();
            prop_assert_eq!(after, before);
        }
    }
}
