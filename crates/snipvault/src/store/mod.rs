//! # Storage Layer
//!
//! Two layers live here:
//!
//! 1. **Persistence**: [`backend::StorageBackend`] is a raw key-value interface, and
//!    [`storage::SnippetStorage`] maps the two documents snipvault keeps (`snippets` and
//!    `style`) onto it.
//! 2. **Collection**: [`SnippetStore`] owns the authoritative, ordered snippet list and the
//!    deleted-snippet stack used for undo.
//!
//! ## In-Memory State Is Authoritative
//!
//! The collection is updated first and written through to storage second. A failed write is
//! logged and otherwise ignored: the next save (autosave or explicit) writes the full
//! collection again.
//!
//! ## Deletion Lifecycle
//!
//! - **Delete**: The snippet leaves the collection and goes to the front of the deleted stack.
//!   Storage drops it immediately.
//! - **Undo**: The front of the stack is re-inserted through the add path. The id it had
//!   before deletion is kept.
//! - The stack only lives in memory; it is gone once the engine is dropped.
//!
//! ## Implementations
//!
//! - [`mem_backend::MemBackend`]: in-memory, shareable between clones. Used by tests.
//! - [`fs_backend::FsBackend`]: one JSON file per key with atomic writes.

use crate::error::{Result, SnipError};
use crate::model::Snippet;
use crate::ordering;
use std::collections::VecDeque;
use uuid::Uuid;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod storage;

use backend::StorageBackend;
use storage::{Durability, SnippetStorage};

/// Fresh opaque snippet id (random UUID v4).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

pub struct SnippetStore<B: StorageBackend> {
    snippets: Vec<Snippet>,
    deleted: VecDeque<Snippet>,
    storage: SnippetStorage<B>,
}

impl<B: StorageBackend> SnippetStore<B> {
    /// Loads the stored collection and puts it in default order.
    pub fn open(storage: SnippetStorage<B>) -> Result<Self> {
        let mut snippets = storage.snippets()?;
        for snippet in &mut snippets {
            snippet.showing = true;
        }
        ordering::sort_default(&mut snippets);
        tracing::debug!(count = snippets.len(), "loaded snippets");

        Ok(Self {
            snippets,
            deleted: VecDeque::new(),
            storage,
        })
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub(crate) fn snippets_mut(&mut self) -> &mut Vec<Snippet> {
        &mut self.snippets
    }

    pub fn deleted(&self) -> impl Iterator<Item = &Snippet> {
        self.deleted.iter()
    }

    pub fn deleted_len(&self) -> usize {
        self.deleted.len()
    }

    pub fn storage(&self) -> &SnippetStorage<B> {
        &self.storage
    }

    /// Assigns a new id, prepends the snippet and writes it through. Returns the id.
    pub fn add(&mut self, mut snippet: Snippet) -> String {
        snippet.id = generate_id();
        self.insert(snippet)
    }

    /// Pops the most recently deleted snippet back into the collection, keeping its id.
    /// Returns `None` when there is nothing to restore.
    pub fn undo(&mut self) -> Option<String> {
        let snippet = self.deleted.pop_front()?;
        Some(self.insert(snippet))
    }

    fn insert(&mut self, snippet: Snippet) -> String {
        if let Err(e) = self.storage.add_snippet(&snippet) {
            tracing::warn!(id = %snippet.id, error = %e, "failed to persist snippet");
        }
        let id = snippet.id.clone();
        self.snippets.insert(0, snippet);
        id
    }

    /// Moves every snippet with `id` to the front of the deleted stack.
    pub fn delete(&mut self, id: &str) -> Result<Vec<Snippet>> {
        if !self.snippets.iter().any(|snippet| snippet.id == id) {
            return Err(SnipError::SnippetNotFound(id.to_string()));
        }

        let (removed, kept): (Vec<Snippet>, Vec<Snippet>) = std::mem::take(&mut self.snippets)
            .into_iter()
            .partition(|snippet| snippet.id == id);
        self.snippets = kept;
        for snippet in removed.iter().rev() {
            self.deleted.push_front(snippet.clone());
        }

        if let Err(e) = self.storage.remove_snippet(id) {
            tracing::warn!(id, error = %e, "failed to persist deletion");
        }
        Ok(removed)
    }

    /// Inserts `batch` at the front, keeping its order. Nothing is written.
    pub fn prepend(&mut self, batch: Vec<Snippet>) {
        self.snippets.splice(0..0, batch);
    }

    pub fn by_id(&self, id: &str) -> Result<&Snippet> {
        self.snippets
            .iter()
            .find(|snippet| snippet.id == id)
            .ok_or_else(|| SnipError::SnippetNotFound(id.to_string()))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Result<&mut Snippet> {
        self.snippets
            .iter_mut()
            .find(|snippet| snippet.id == id)
            .ok_or_else(|| SnipError::SnippetNotFound(id.to_string()))
    }

    /// Writes the full collection and asks the backend to confirm durability.
    pub fn save(&self) -> Result<Durability> {
        self.storage.save_snippets(&self.snippets)
    }
}
