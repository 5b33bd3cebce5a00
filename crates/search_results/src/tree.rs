// Chunk: docs/chunks/search_results_panel - Arena-backed results tree
//!
//! The three-level results tree.
//!
//! ```text
//! Search "foo" (3 hits in 2 file)         <- NodeKind::Search
//! ├── /src/a.rs (2 hits)                  <- NodeKind::File
//! │   ├──  10 | let foo = 1;              <- NodeKind::Result
//! │   └──  42 | foo(bar);
//! └── New 1 (1 hits)
//!     └──   3 | foo
//! ```
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. The tree
//! owns every node; removing nodes one at a time is not supported, only
//! [`ResultTree::clear`]. Ids are never reused: after a clear, new nodes are
//! numbered past every id issued before it, so a stale id resolves to nothing.
//!
//! Each node exposes two display columns. Header rows (search and file)
//! put their label in column 0 and span it across the row; result rows show
//! the line number in column 0 and the matched text in column 1.

use crate::editor_handle::EditorHandle;
use crate::style::NodeStyle;
use crate::types::NodeId;

/// Number of display columns every node exposes.
pub const COLUMN_COUNT: usize = 2;

// =============================================================================
// Node payloads
// =============================================================================

/// Root of one find-in-files run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub term: String,
    pub label: String,
}

/// All matches found in one editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// File path or in-memory name, captured when the entry was created.
    pub display_path: String,
    /// The editor the matches came from. May have been closed since.
    pub editor: EditorHandle,
    pub label: String,
}

/// One matched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultNode {
    line_number: u32,
    line_number_text: String,
    line_text: String,
}

impl ResultNode {
    pub fn new(line_text: impl Into<String>, line_number: u32) -> Self {
        Self {
            line_number,
            line_number_text: line_number.to_string(),
            line_text: line_text.into(),
        }
    }

    /// 1-based line number of the match.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    pub fn line_number_text(&self) -> &str {
        &self.line_number_text
    }

    pub fn line_text(&self) -> &str {
        &self.line_text
    }
}

/// The payload of a tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Search(SearchNode),
    File(FileNode),
    Result(ResultNode),
}

// =============================================================================
// Node
// =============================================================================

#[derive(Debug, Clone)]
pub struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
    expanded: bool,
    first_column_spanned: bool,
    style: NodeStyle,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether column 0 spans the full row width.
    pub fn first_column_spanned(&self) -> bool {
        self.first_column_spanned
    }

    pub fn style(&self) -> NodeStyle {
        self.style
    }

    /// Text shown in the given display column. Out-of-range columns are empty.
    pub fn column_text(&self, column: usize) -> &str {
        match (&self.kind, column) {
            (NodeKind::Search(search), 0) => &search.label,
            (NodeKind::File(file), 0) => &file.label,
            (NodeKind::Result(result), 0) => result.line_number_text(),
            (NodeKind::Result(result), 1) => result.line_text(),
            _ => "",
        }
    }

    /// Replaces the label of a header row. Result rows have no label and are
    /// left untouched.
    pub(crate) fn set_label(&mut self, label: String) {
        match &mut self.kind {
            NodeKind::Search(search) => search.label = label,
            NodeKind::File(file) => file.label = label,
            NodeKind::Result(_) => {}
        }
    }
}

/// Builder-style options for a node being inserted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeOptions {
    pub expanded: bool,
    pub first_column_spanned: bool,
    pub style: NodeStyle,
}

/// One row of the flattened, expansion-aware view of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// 0 for search rows, 1 for files, 2 for results.
    pub depth: usize,
    pub node: NodeId,
}

// =============================================================================
// ResultTree
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ResultTree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    /// Id of `nodes[0]`. Advanced past all issued ids on every clear.
    base: usize,
}

impl ResultTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level node.
    pub(crate) fn add_root(&mut self, kind: NodeKind, options: NodeOptions) -> NodeId {
        let id = self.push(None, kind, options);
        self.roots.push(id);
        id
    }

    /// Appends a node as the last child of `parent`.
    ///
    /// Returns `None` if `parent` does not name a node in this tree.
    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        options: NodeOptions,
    ) -> Option<NodeId> {
        let slot = self.slot(parent)?;
        let id = self.push(Some(parent), kind, options);
        self.nodes[slot].children.push(id);
        Some(id)
    }

    /// Arena position of `id`, or `None` if it predates the last clear or
    /// was never issued.
    fn slot(&self, id: NodeId) -> Option<usize> {
        id.0
            .checked_sub(self.base)
            .filter(|&slot| slot < self.nodes.len())
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind, options: NodeOptions) -> NodeId {
        let id = NodeId(self.base + self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            kind,
            expanded: options.expanded,
            first_column_spanned: options.first_column_spanned,
            style: options.style,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(self.slot(id)?)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slot(id)?;
        self.nodes.get_mut(slot)
    }

    /// Top-level (search) nodes in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Total number of nodes of every kind.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node. All previously issued [`NodeId`]s stop resolving,
    /// even once new nodes are added.
    pub(crate) fn clear(&mut self) {
        self.base += self.nodes.len();
        self.nodes.clear();
        self.roots.clear();
    }

    /// Iterates all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        let base = self.base;
        self.nodes
            .iter()
            .enumerate()
            .map(move |(i, node)| (NodeId(base + i), node))
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    pub fn collapse_all(&mut self) {
        for node in &mut self.nodes {
            node.expanded = false;
        }
    }

    /// Returns false if `id` does not name a node.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.expanded = expanded;
                true
            }
            None => false,
        }
    }

    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        match self.get_mut(id) {
            Some(node) => {
                node.expanded = !node.expanded;
                true
            }
            None => false,
        }
    }

    /// Flattens the tree depth-first, skipping the children of collapsed nodes.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<(usize, NodeId)> = self.roots.iter().rev().map(|&id| (0, id)).collect();

        while let Some((depth, id)) = stack.pop() {
            rows.push(VisibleRow { depth, node: id });
            let Some(node) = self.get(id) else {
                continue;
            };
            if node.expanded {
                stack.extend(node.children.iter().rev().map(|&child| (depth + 1, child)));
            }
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(term: &str) -> NodeKind {
        NodeKind::Search(SearchNode {
            term: term.to_string(),
            label: format!("Search \"{}\"", term),
        })
    }

    fn file(path: &str) -> NodeKind {
        NodeKind::File(FileNode {
            display_path: path.to_string(),
            editor: EditorHandle::from_raw(0, 0),
            label: path.to_string(),
        })
    }

    fn expanded() -> NodeOptions {
        NodeOptions {
            expanded: true,
            ..NodeOptions::default()
        }
    }

    // =========================================================================
    // Structure
    // =========================================================================

    #[test]
    fn test_add_root_and_children() {
        let mut tree = ResultTree::new();
        let root = tree.add_root(search("foo"), expanded());
        let f = tree.add_child(root, file("a.rs"), expanded()).unwrap();
        let r = tree
            .add_child(f, NodeKind::Result(ResultNode::new("foo()", 10)), NodeOptions::default())
            .unwrap();

        assert_eq!(tree.roots(), &[root]);
        assert_eq!(tree.children(root), &[f]);
        assert_eq!(tree.parent(r), Some(f));
        assert_eq!(tree.parent(f), Some(root));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.child_count(r), 0);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_add_child_to_unknown_parent() {
        let mut tree = ResultTree::new();
        assert!(tree.add_child(NodeId(5), file("x"), NodeOptions::default()).is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut tree = ResultTree::new();
        let root = tree.add_root(search("foo"), expanded());
        tree.add_child(root, file("a.rs"), expanded());
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
        assert!(tree.get(root).is_none());
    }

    #[test]
    fn test_clear_does_not_reuse_ids() {
        let mut tree = ResultTree::new();
        let old_root = tree.add_root(search("old"), expanded());
        let old_file = tree.add_child(old_root, file("a.rs"), expanded()).unwrap();
        tree.clear();

        let new_root = tree.add_root(search("new"), expanded());
        let new_file = tree.add_child(new_root, file("b.rs"), expanded()).unwrap();

        assert_ne!(new_root, old_root);
        assert_ne!(new_file, old_file);
        assert!(tree.get(old_root).is_none());
        assert!(tree.get(old_file).is_none());
        assert!(tree.add_child(old_root, file("c.rs"), expanded()).is_none());
        assert_eq!(tree.children(new_root), &[new_file]);

        let ids: Vec<NodeId> = tree.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![new_root, new_file]);
        assert_eq!(tree.visible_rows().len(), 2);
    }

    // =========================================================================
    // Columns
    // =========================================================================

    #[test]
    fn test_result_columns() {
        let mut tree = ResultTree::new();
        let root = tree.add_root(search("foo"), expanded());
        let f = tree.add_child(root, file("a.rs"), expanded()).unwrap();
        let r = tree
            .add_child(
                f,
                NodeKind::Result(ResultNode::new("let foo = 1;", 42)),
                NodeOptions::default(),
            )
            .unwrap();

        let node = tree.get(r).unwrap();
        assert_eq!(node.column_text(0), "42");
        assert_eq!(node.column_text(1), "let foo = 1;");
        assert_eq!(node.column_text(2), "");
    }

    #[test]
    fn test_header_columns() {
        let mut tree = ResultTree::new();
        let root = tree.add_root(search("foo"), expanded());
        let node = tree.get(root).unwrap();
        assert_eq!(node.column_text(0), "Search \"foo\"");
        assert_eq!(node.column_text(1), "");
    }

    #[test]
    fn test_set_label_ignores_results() {
        let mut tree = ResultTree::new();
        let root = tree.add_root(search("foo"), expanded());
        let f = tree.add_child(root, file("a.rs"), expanded()).unwrap();
        let r = tree
            .add_child(f, NodeKind::Result(ResultNode::new("x", 1)), NodeOptions::default())
            .unwrap();

        tree.get_mut(r).unwrap().set_label("nope".to_string());
        assert_eq!(tree.get(r).unwrap().column_text(0), "1");

        tree.get_mut(f).unwrap().set_label("a.rs (1 hits)".to_string());
        assert_eq!(tree.get(f).unwrap().column_text(0), "a.rs (1 hits)");
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    #[test]
    fn test_visible_rows_respects_expansion() {
        let mut tree = ResultTree::new();
        let root = tree.add_root(search("foo"), expanded());
        let a = tree.add_child(root, file("a.rs"), expanded()).unwrap();
        let a1 = tree
            .add_child(a, NodeKind::Result(ResultNode::new("x", 1)), NodeOptions::default())
            .unwrap();
        let b = tree.add_child(root, file("b.rs"), NodeOptions::default()).unwrap();
        tree.add_child(b, NodeKind::Result(ResultNode::new("y", 2)), NodeOptions::default());

        let rows = tree.visible_rows();
        assert_eq!(
            rows,
            vec![
                VisibleRow { depth: 0, node: root },
                VisibleRow { depth: 1, node: a },
                VisibleRow { depth: 2, node: a1 },
                VisibleRow { depth: 1, node: b },
            ]
        );
    }

    #[test]
    fn test_collapse_all_hides_children() {
        let mut tree = ResultTree::new();
        let first = tree.add_root(search("one"), expanded());
        tree.add_child(first, file("a.rs"), expanded());
        let second = tree.add_root(search("two"), expanded());

        tree.collapse_all();

        let rows = tree.visible_rows();
        assert_eq!(
            rows,
            vec![
                VisibleRow { depth: 0, node: first },
                VisibleRow { depth: 0, node: second },
            ]
        );
    }

    #[test]
    fn test_toggle_expanded() {
        let mut tree = ResultTree::new();
        let root = tree.add_root(search("foo"), NodeOptions::default());
        assert!(!tree.get(root).unwrap().is_expanded());
        assert!(tree.toggle_expanded(root));
        assert!(tree.get(root).unwrap().is_expanded());
        assert!(!tree.toggle_expanded(NodeId(99)));
        assert!(!tree.set_expanded(NodeId(99), true));
    }
}
