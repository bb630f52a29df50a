#![forbid(unsafe_code)]

//! Immutable tree snapshots with side-table view state.
//!
//! A [`TreeNode`] snapshot is plain data supplied from outside and replaced
//! wholesale on every refresh — never patched in place. Expansion and
//! selection live next to it in [`TreeState`], keyed by node id, so the
//! content stays immutable and a snapshot swap resets the view cheaply.
//!
//! Expansion is stored as the set of *collapsed* ids: a node absent from
//! the set is expanded, which makes "every folder starts expanded" the
//! no-entry default.

use ahash::AHashSet;

/// Whether a node is a leaf or a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum NodeKind {
    /// A leaf; primary interaction selects it.
    File,
    /// A container; primary interaction toggles its expansion.
    Folder,
}

/// A node in a tree snapshot.
///
/// Ids must be unique within one snapshot; they are the supplier's stable
/// identifiers (file paths, in the original file-tree use).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TreeNode {
    id: String,
    display_name: String,
    kind: NodeKind,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node.
    #[must_use]
    pub fn file(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    /// Create a container node.
    #[must_use]
    pub fn folder(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind: NodeKind::Folder,
            children: Vec::new(),
        }
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }

    /// Replace the children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<TreeNode>) -> Self {
        self.children = nodes;
        self
    }

    /// The node's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The name shown on the node's row.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Leaf or container.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Whether this node is a container.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder)
    }

    /// Child nodes, in supplier order.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    #[cfg(debug_assertions)]
    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.push(&self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}

/// Indentation rule for rendered rows: `level * unit + base`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TreeLayout {
    /// Indentation added per depth level.
    pub unit: f64,
    /// Base offset applied to every row.
    pub base: f64,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            unit: 12.0,
            base: 4.0,
        }
    }
}

impl TreeLayout {
    /// Indentation for a row at the given depth.
    #[inline]
    #[must_use]
    pub fn indent(&self, level: usize) -> f64 {
        level as f64 * self.unit + self.base
    }
}

/// One visible row of the depth-first rendering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow<'a> {
    /// The node this row presents. The row carries its owning node
    /// directly; interactive elements never recover it from structure.
    pub node: &'a TreeNode,
    /// Depth, root rows at 0.
    pub level: usize,
    /// `level * unit + base`, per the state's [`TreeLayout`].
    pub indent: f64,
    /// Expansion flag; always `false` for files.
    pub expanded: bool,
    /// Whether this row is the current selection.
    pub selected: bool,
}

/// What a primary interaction with a row did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// A folder's expansion flag flipped.
    Toggled {
        /// The folder's id.
        id: String,
        /// The flag's new value.
        expanded: bool,
    },
    /// A file row was chosen and is now the selection. The owner forwards
    /// this to its select collaborator.
    Selected {
        /// The file's id.
        id: String,
    },
}

/// Exportable view state: which folders are collapsed, what is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TreeViewState {
    /// Collapsed folder ids.
    pub collapsed: Vec<String>,
    /// Selected node id, if any.
    pub selected: Option<String>,
}

/// A tree snapshot plus the mutable view state that describes it.
#[derive(Debug, Clone, Default)]
pub struct TreeState {
    roots: Vec<TreeNode>,
    collapsed: AHashSet<String>,
    selected: Option<String>,
    layout: TreeLayout,
}

impl TreeState {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation rule.
    #[must_use]
    pub fn with_layout(mut self, layout: TreeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Root nodes of the current snapshot. An empty slice renders as an
    /// empty tree; it is not an error.
    #[must_use]
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// The indentation rule.
    #[must_use]
    pub const fn layout(&self) -> TreeLayout {
        self.layout
    }

    /// Replace the snapshot wholesale.
    ///
    /// All expansion flags reset to the default (expanded). The selection
    /// survives only if the selected id exists in the new snapshot.
    pub fn set_snapshot(&mut self, roots: Vec<TreeNode>) {
        #[cfg(debug_assertions)]
        {
            let mut ids = Vec::new();
            for root in &roots {
                root.collect_ids(&mut ids);
            }
            let unique: AHashSet<&str> = ids.iter().copied().collect();
            debug_assert_eq!(unique.len(), ids.len(), "tree snapshot has duplicate node ids");
        }

        self.roots = roots;
        self.collapsed.clear();
        let selection_stale = self
            .selected
            .as_deref()
            .is_some_and(|id| self.find(id).is_none());
        if selection_stale {
            self.selected = None;
        }
        tracing::debug!(message = "tree.snapshot", roots = self.roots.len());
    }

    /// Find a node anywhere in the snapshot.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// Whether a node is expanded. Nodes default to expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        !self.collapsed.contains(id)
    }

    /// Flip one folder's expansion flag. Siblings and descendants keep
    /// their own flags.
    pub fn toggle(&mut self, id: &str) {
        let expanded = if self.collapsed.remove(id) {
            true
        } else {
            self.collapsed.insert(id.to_owned());
            false
        };
        tracing::debug!(message = "tree.toggle", id, expanded);
    }

    /// The current selection.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Set or clear the selection directly.
    pub fn set_selected(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Primary interaction with the row for `id`: folders toggle their
    /// expansion, files become the selection. Returns what happened, or
    /// `None` when the id is not in the snapshot.
    pub fn activate(&mut self, id: &str) -> Option<TreeEvent> {
        let node = self.find(id)?;
        match node.kind() {
            NodeKind::Folder => {
                self.toggle(id);
                Some(TreeEvent::Toggled {
                    id: id.to_owned(),
                    expanded: self.is_expanded(id),
                })
            }
            NodeKind::File => {
                self.selected = Some(id.to_owned());
                tracing::debug!(message = "tree.select", id);
                Some(TreeEvent::Selected { id: id.to_owned() })
            }
        }
    }

    /// Derive the visible rows, depth first: each row, then (if expanded)
    /// its children at `level + 1`.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<TreeRow<'_>> {
        let mut rows = Vec::new();
        for root in &self.roots {
            self.push_rows(root, 0, &mut rows);
        }
        rows
    }

    fn push_rows<'a>(&'a self, node: &'a TreeNode, level: usize, rows: &mut Vec<TreeRow<'a>>) {
        let expanded = node.is_folder() && self.is_expanded(node.id());
        rows.push(TreeRow {
            node,
            level,
            indent: self.layout.indent(level),
            expanded,
            selected: self.selected.as_deref() == Some(node.id()),
        });
        if expanded {
            for child in node.children() {
                self.push_rows(child, level + 1, rows);
            }
        }
    }

    /// Export the view state for persistence.
    #[must_use]
    pub fn view_state(&self) -> TreeViewState {
        let mut collapsed: Vec<String> = self.collapsed.iter().cloned().collect();
        collapsed.sort_unstable();
        TreeViewState {
            collapsed,
            selected: self.selected.clone(),
        }
    }

    /// Merge a previously exported view state onto the current snapshot.
    ///
    /// Ids that no longer exist are dropped.
    pub fn restore_view_state(&mut self, state: &TreeViewState) {
        self.collapsed = state
            .collapsed
            .iter()
            .filter(|id| self.find(id).is_some())
            .cloned()
            .collect();
        self.selected = state
            .selected
            .as_ref()
            .filter(|id| self.find(id).is_some())
            .cloned();
    }
}

/// Assemble a snapshot from flat `/`-separated paths — the shape file
/// listings arrive in from a backend. Intermediate folders are created on
/// demand; a trailing `/` marks an explicit (possibly empty) folder. Ids
/// are full paths. Children order folders before files, names ascending.
#[must_use]
pub fn from_paths<I, S>(paths: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct PathNode {
        children: BTreeMap<String, PathNode>,
        folder: bool,
    }

    fn convert(name: &str, node: &PathNode, prefix: &str) -> TreeNode {
        let path = if prefix.is_empty() {
            name.to_owned()
        } else {
            format!("{prefix}/{name}")
        };
        if node.folder || !node.children.is_empty() {
            TreeNode::folder(&path, name).with_children(convert_children(&node.children, &path))
        } else {
            TreeNode::file(&path, name)
        }
    }

    fn convert_children(children: &BTreeMap<String, PathNode>, prefix: &str) -> Vec<TreeNode> {
        let (folders, files): (Vec<_>, Vec<_>) = children
            .iter()
            .partition(|(_, node)| node.folder || !node.children.is_empty());
        folders
            .into_iter()
            .chain(files)
            .map(|(name, node)| convert(name, node, prefix))
            .collect()
    }

    let mut root = PathNode::default();
    for path in paths {
        let path = path.as_ref();
        let explicit_folder = path.ends_with('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut cursor = &mut root;
        for (index, segment) in segments.iter().enumerate() {
            let last = index + 1 == segments.len();
            cursor = cursor.children.entry((*segment).to_owned()).or_default();
            if !last || explicit_folder {
                cursor.folder = true;
            }
        }
    }

    convert_children(&root.children, "")
}
