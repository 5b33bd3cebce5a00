// Chunk: docs/chunks/search_results_panel - Weak editor handles for search results
//!
//! Non-owning references from search results back to open editors.
//!
//! A file entry in the results tree remembers which editor it was found in so
//! that activating a result can jump there. The editor is owned by the host,
//! and the user may close it at any time without telling the results panel.
//! An [`EditorHandle`] therefore never keeps an editor alive: it is a
//! generation-checked index into the host's [`EditorRegistry`], and must be
//! re-validated every time it is used.
//!
//! # Example
//!
//! ```
//! use lite_edit_search_results::{EditorLiveness, EditorRegistry, SearchableEditor};
//! use std::path::{Path, PathBuf};
//!
//! struct Doc(Option<PathBuf>);
//!
//! impl SearchableEditor for Doc {
//!     fn is_file(&self) -> bool { self.0.is_some() }
//!     fn file_path(&self) -> Option<&Path> { self.0.as_deref() }
//!     fn name(&self) -> &str { "Untitled" }
//! }
//!
//! let mut registry = EditorRegistry::new();
//! let handle = registry.insert(Doc(None)).unwrap();
//! assert!(registry.is_alive(handle));
//!
//! registry.remove(handle);
//! assert!(!registry.is_alive(handle));
//! ```

use std::path::Path;

// =============================================================================
// SearchableEditor
// =============================================================================

/// What the results panel needs to know about an editor.
///
/// Queried once, when the editor's file entry is created. The answer is
/// cached on the entry; later renames are not reflected.
pub trait SearchableEditor {
    /// Returns true if the editor is backed by a saved file.
    fn is_file(&self) -> bool;

    /// The backing file, if any.
    fn file_path(&self) -> Option<&Path>;

    /// The in-memory display name ("New 1", "Untitled", ...).
    fn name(&self) -> &str;

    /// The identity shown on a file entry: the file path when file-backed,
    /// otherwise the display name.
    fn display_identity(&self) -> String {
        match self.file_path() {
            Some(path) if self.is_file() => path.display().to_string(),
            _ => self.name().to_string(),
        }
    }
}

// =============================================================================
// EditorHandle
// =============================================================================

/// A weak reference to an editor in an [`EditorRegistry`].
///
/// Copying a handle is free. A handle goes stale when its editor is removed;
/// the slot may be reused by a later editor, but the generation mismatch keeps
/// the stale handle from resolving to the newcomer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorHandle {
    index: u32,
    generation: u32,
}

impl EditorHandle {
    /// Builds a handle from raw parts.
    ///
    /// Hosts that keep their own editor storage use this together with a
    /// custom [`EditorLiveness`] implementation.
    pub fn from_raw(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

// =============================================================================
// EditorLiveness
// =============================================================================

/// Answers "does the editor behind this handle still exist?".
///
/// Implemented by [`EditorRegistry`]. Hosts with their own editor storage can
/// implement it directly.
pub trait EditorLiveness {
    fn is_alive(&self, handle: EditorHandle) -> bool;
}

// =============================================================================
// EditorRegistry
// =============================================================================

#[derive(Debug)]
struct Slot<E> {
    generation: u32,
    editor: Option<E>,
}

/// Owner of the open editors, addressed by [`EditorHandle`].
#[derive(Debug)]
pub struct EditorRegistry<E> {
    slots: Vec<Slot<E>>,
    free: Vec<u32>,
}

impl<E> Default for EditorRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EditorRegistry<E> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Adds an editor and returns its handle.
    ///
    /// Returns `None` if every addressable slot is in use.
    pub fn insert(&mut self, editor: E) -> Option<EditorHandle> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.editor = Some(editor);
            return Some(EditorHandle {
                index,
                generation: slot.generation,
            });
        }

        let index = slot_index(self.slots.len())?;
        self.slots.push(Slot {
            generation: 0,
            editor: Some(editor),
        });
        Some(EditorHandle {
            index,
            generation: 0,
        })
    }

    /// Closes the editor, returning it. Every outstanding handle to it goes stale.
    ///
    /// Returns `None` if the handle was already stale.
    pub fn remove(&mut self, handle: EditorHandle) -> Option<E> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let editor = slot.editor.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        Some(editor)
    }

    /// Resolves a handle, or `None` if the editor has been closed.
    pub fn get(&self, handle: EditorHandle) -> Option<&E> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.editor.as_ref())
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, handle: EditorHandle) -> Option<&mut E> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.editor.as_mut())
    }

    /// Number of open editors.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index for a slot appended at position `len`, if it fits in a handle.
fn slot_index(len: usize) -> Option<u32> {
    u32::try_from(len).ok()
}

impl<E> EditorLiveness for EditorRegistry<E> {
    fn is_alive(&self, handle: EditorHandle) -> bool {
        self.get(handle).is_some()
    }
}
