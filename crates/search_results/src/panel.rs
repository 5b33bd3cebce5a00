// Chunk: docs/chunks/search_results_panel - Incremental find-in-files results panel
//!
//! The search results panel model.
//!
//! A find-in-files driver reports its progress as a stream of lifecycle
//! events, always in this order per search:
//!
//! ```text
//! new_search → { new_file_entry → new_results_entry* }* → complete_search
//! ```
//!
//! [`SearchResultsPanel`] turns that stream into a [`ResultTree`] with one
//! search row, one row per file and one row per matched line. Running
//! counters feed the search and file labels, which are rewritten after every
//! event so they never lag behind the tree.
//!
//! Completing a search only stops tracking it; its rows stay in the tree
//! alongside earlier searches until the host calls [`SearchResultsPanel::clear`].
//!
//! Activating a result row ([`SearchResultsPanel::item_activated`]) sends a
//! [`PanelEvent::ResultActivated`] to the host, provided the editor the
//! match came from is still open.
//!
//! [`PanelEvent::ResultActivated`]: crate::PanelEvent::ResultActivated

use unicode_width::UnicodeWidthStr;

use crate::config::PanelConfig;
use crate::editor_handle::{EditorHandle, EditorLiveness, SearchableEditor};
use crate::labels::{file_label, search_label};
use crate::panel_event::PanelEventSender;
use crate::tree::{
    FileNode, NodeKind, NodeOptions, ResultNode, ResultTree, SearchNode, COLUMN_COUNT,
};
use crate::types::NodeId;

// =============================================================================
// SearchProgress
// =============================================================================

/// Tracking state of the search currently being reported.
///
/// All fields are cleared by [`SearchResultsPanel::complete_search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SearchProgress {
    search_term: String,
    current_search: Option<NodeId>,
    current_file: Option<NodeId>,
    current_file_path: String,
    /// Files started since the search began.
    current_file_count: usize,
    /// Hits in the current file.
    total_file_hit_count: usize,
    /// Hits across the whole search.
    total_hit_count: usize,
}

// =============================================================================
// SearchResultsPanel
// =============================================================================

#[derive(Debug)]
pub struct SearchResultsPanel {
    tree: ResultTree,
    progress: SearchProgress,
    config: PanelConfig,
    events: PanelEventSender,
    column_widths: [usize; COLUMN_COUNT],
}

impl SearchResultsPanel {
    /// Creates an empty panel that reports activations through `events`.
    pub fn new(events: PanelEventSender) -> Self {
        Self::with_config(PanelConfig::default(), events)
    }

    pub fn with_config(config: PanelConfig, events: PanelEventSender) -> Self {
        Self {
            tree: ResultTree::new(),
            progress: SearchProgress::default(),
            config,
            events,
            column_widths: [0; COLUMN_COUNT],
        }
    }

    // =========================================================================
    // Search lifecycle
    // =========================================================================

    /// Starts a new search row and makes it the current search.
    ///
    /// Earlier searches are collapsed but kept. If the previous search was
    /// never completed its row stays in the tree, untracked.
    pub fn new_search(&mut self, search_term: &str) {
        tracing::debug!(term = search_term, "new search");

        if self.progress.current_search.is_some() {
            tracing::warn!("new search started before the previous one completed");
        }

        self.progress.search_term = search_term.to_string();

        if self.config.collapse_previous_on_new_search {
            self.tree.collapse_all();
        }

        let options = NodeOptions {
            expanded: self.config.expand_new_nodes,
            first_column_spanned: true,
            style: self.config.palette.search,
        };
        let node = self.tree.add_root(
            NodeKind::Search(SearchNode {
                term: search_term.to_string(),
                label: String::new(),
            }),
            options,
        );
        self.progress.current_search = Some(node);

        self.update_search_status();
    }

    /// Starts a file row under the current search for matches found in `editor`.
    ///
    /// The editor's display identity is read once, here. Only `handle` is
    /// kept, so closing the editor later does not disturb the tree.
    pub fn new_file_entry<E>(&mut self, handle: EditorHandle, editor: &E)
    where
        E: SearchableEditor + ?Sized,
    {
        debug_assert!(
            self.progress.current_search.is_some(),
            "new_file_entry called without an active search"
        );
        let Some(search) = self.progress.current_search else {
            tracing::warn!("ignoring file entry reported outside of a search");
            return;
        };

        let display_path = editor.display_identity();
        tracing::debug!(path = %display_path, "new file entry");

        let options = NodeOptions {
            expanded: self.config.expand_new_nodes,
            first_column_spanned: true,
            style: self.config.palette.file,
        };
        let Some(file) = self.tree.add_child(
            search,
            NodeKind::File(FileNode {
                display_path: display_path.clone(),
                editor: handle,
                label: String::new(),
            }),
            options,
        ) else {
            tracing::warn!(path = %display_path, "current search row is gone; ignoring file entry");
            return;
        };

        self.progress.current_file = Some(file);
        self.progress.current_file_path = display_path;
        self.progress.total_file_hit_count = 0;
        self.progress.current_file_count += 1;
        self.update_search_status();
    }

    /// Adds one matched line under the current file row.
    pub fn new_results_entry(&mut self, line: &str, line_number: u32) {
        debug_assert!(
            self.progress.current_file.is_some(),
            "new_results_entry called without a current file"
        );
        let Some(file) = self.progress.current_file else {
            tracing::warn!(line_number, "ignoring result reported outside of a file entry");
            return;
        };

        tracing::trace!(line_number, "new result");

        let options = NodeOptions {
            expanded: false,
            first_column_spanned: false,
            style: self.config.palette.line_number,
        };
        let added = self
            .tree
            .add_child(file, NodeKind::Result(ResultNode::new(line, line_number)), options);
        if added.is_none() {
            tracing::warn!(line_number, "current file row is gone; ignoring result");
            return;
        }

        self.progress.total_file_hit_count += 1;
        self.progress.total_hit_count += 1;

        self.update_search_status();
    }

    /// Stops tracking the current search and resets every counter.
    ///
    /// The search's rows are left in place.
    pub fn complete_search(&mut self) {
        tracing::debug!(
            term = %self.progress.search_term,
            hits = self.progress.total_hit_count,
            files = self.progress.current_file_count,
            "search complete"
        );

        self.progress.current_search = None;
        self.progress.current_file = None;
        self.progress.current_file_count = 0;
        self.progress.total_file_hit_count = 0;
        self.progress.total_hit_count = 0;

        self.resize_column_to_contents(0);
    }

    /// Drops every row and any in-progress tracking.
    pub fn clear(&mut self) {
        tracing::debug!("clearing search results");
        self.tree.clear();
        self.progress = SearchProgress::default();
        self.column_widths = [0; COLUMN_COUNT];
    }

    /// Rewrites the current search label and, if a file is in progress, its label.
    fn update_search_status(&mut self) {
        let progress = &self.progress;

        if let Some(search) = progress.current_search {
            let label = search_label(
                &progress.search_term,
                progress.total_hit_count,
                progress.current_file_count,
            );
            if let Some(node) = self.tree.get_mut(search) {
                node.set_label(label);
            }
        }

        if let Some(file) = progress.current_file {
            let label = file_label(&progress.current_file_path, progress.total_file_hit_count);
            if let Some(node) = self.tree.get_mut(file) {
                node.set_label(label);
            }
        }
    }

    /// Records the display width of the widest cell in `column`.
    ///
    /// Rows whose first column spans the full width do not contribute, since
    /// their text is not constrained by the column.
    fn resize_column_to_contents(&mut self, column: usize) {
        if column >= COLUMN_COUNT {
            return;
        }
        self.column_widths[column] = self
            .tree
            .iter()
            .filter(|(_, node)| !(column == 0 && node.first_column_spanned()))
            .map(|(_, node)| node.column_text(column).width())
            .max()
            .unwrap_or(0);
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Handles the user activating `node` (double click or Enter).
    ///
    /// Only result rows react: a row with no children *and* a parent. The
    /// parent check matters because a search row that found nothing also has
    /// no children.
    ///
    /// If the result's editor has been closed, nothing happens. Returns true
    /// if an activation was sent to the host.
    pub fn item_activated(&self, node: NodeId, editors: &impl EditorLiveness) -> bool {
        let Some(item) = self.tree.get(node) else {
            return false;
        };
        if item.child_count() != 0 {
            return false;
        }
        let Some(parent) = item.parent() else {
            return false;
        };

        let editor = match self.tree.get(parent).map(|p| p.kind()) {
            Some(NodeKind::File(file)) => file.editor,
            _ => return false,
        };
        let line_number = match item.kind() {
            NodeKind::Result(result) => result.line_number(),
            _ => return false,
        };

        if !editors.is_alive(editor) {
            tracing::debug!(line_number, "activated result belongs to a closed editor");
            return false;
        }

        match self.events.send_result_activated(editor, line_number) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "no listener for result activation");
                false
            }
        }
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    /// Expands or collapses a row. Returns false if `node` is not in the tree.
    pub fn set_expanded(&mut self, node: NodeId, expanded: bool) -> bool {
        self.tree.set_expanded(node, expanded)
    }

    pub fn toggle_expanded(&mut self, node: NodeId) -> bool {
        self.tree.toggle_expanded(node)
    }

    pub fn collapse_all(&mut self) {
        self.tree.collapse_all();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tree(&self) -> &ResultTree {
        &self.tree
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn search_term(&self) -> &str {
        &self.progress.search_term
    }

    pub fn current_search(&self) -> Option<NodeId> {
        self.progress.current_search
    }

    pub fn current_file(&self) -> Option<NodeId> {
        self.progress.current_file
    }

    /// Hits across the search being tracked.
    pub fn total_hit_count(&self) -> usize {
        self.progress.total_hit_count
    }

    /// Hits in the file being tracked.
    pub fn total_file_hit_count(&self) -> usize {
        self.progress.total_file_hit_count
    }

    /// Files started in the search being tracked.
    pub fn current_file_count(&self) -> usize {
        self.progress.current_file_count
    }

    /// Display width hint for `column`, as of the last completed search.
    pub fn column_width_hint(&self, column: usize) -> usize {
        self.column_widths.get(column).copied().unwrap_or(0)
    }
}
