// Chunk: docs/chunks/search_results_panel - Find-in-files results panel model

//! lite-edit-search-results: the model behind the "Search Results" panel.
//!
//! A find-in-files driver streams its findings into a [`SearchResultsPanel`],
//! which builds a three-level tree (search → file → matched line) and keeps
//! the summary labels current. The host's tree widget renders the tree and
//! forwards row activations back to the panel, which reports them on a
//! [`PanelEvent`] channel so the host can jump to the line.
//!
//! # Example
//!
//! ```
//! use lite_edit_search_results::{
//!     create_panel_channel, EditorRegistry, PanelEvent, SearchResultsPanel, SearchableEditor,
//! };
//! use std::path::{Path, PathBuf};
//!
//! struct Doc {
//!     path: PathBuf,
//! }
//!
//! impl SearchableEditor for Doc {
//!     fn is_file(&self) -> bool { true }
//!     fn file_path(&self) -> Option<&Path> { Some(&self.path) }
//!     fn name(&self) -> &str { "main.rs" }
//! }
//!
//! let mut editors = EditorRegistry::new();
//! let doc = editors.insert(Doc { path: PathBuf::from("src/main.rs") }).unwrap();
//!
//! let (sender, receiver) = create_panel_channel();
//! let mut panel = SearchResultsPanel::new(sender);
//!
//! panel.new_search("foo");
//! panel.new_file_entry(doc, editors.get(doc).unwrap());
//! panel.new_results_entry("let foo = 1;", 10);
//!
//! let search = panel.current_search().unwrap();
//! assert_eq!(
//!     panel.tree().get(search).unwrap().column_text(0),
//!     "Search \"foo\" (1 hits in 1 file)"
//! );
//!
//! let result = panel.tree().children(panel.current_file().unwrap())[0];
//! panel.complete_search();
//!
//! assert!(panel.item_activated(result, &editors));
//! assert_eq!(
//!     receiver.try_recv(),
//!     Some(PanelEvent::ResultActivated { editor: doc, line_number: 10 })
//! );
//! ```
//!
//! # Editor lifetime
//!
//! File rows hold an [`EditorHandle`], never the editor itself. Closing an
//! editor leaves its rows in place; activating one of them afterwards is a
//! silent no-op.

mod config;
mod editor_handle;
mod error;
mod labels;
mod panel;
mod panel_event;
mod style;
mod tree;
mod types;

pub use config::{config_file_path, PanelConfig};
pub use editor_handle::{EditorHandle, EditorLiveness, EditorRegistry, SearchableEditor};
pub use error::ConfigError;
pub use labels::{file_label, search_label};
pub use panel::SearchResultsPanel;
pub use panel_event::{create_panel_channel, PanelEvent, PanelEventReceiver, PanelEventSender};
pub use style::{NodeStyle, ResultPalette};
pub use tree::{
    FileNode, Node, NodeKind, NodeOptions, ResultNode, ResultTree, SearchNode, VisibleRow,
    COLUMN_COUNT,
};
pub use types::{Alignment, NodeId, Rgb};
