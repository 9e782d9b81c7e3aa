//! # Command Layer
//!
//! This module contains the **mutation protocol** of snipvault. Each operation lives in its
//! own submodule and works on an [`EngineState`]:
//!
//! 1. Mutate the [`SnippetStore`].
//! 2. Recompute the derived [`Views`] that depend on the change.
//! 3. Publish new snapshots to subscribers.
//! 4. Emit exactly one [`Notification`] (or none, for pin/unpin).
//!
//! Commands never spawn threads or touch locks; the API facade serializes them by holding
//! the engine lock for the whole call. Because of that, tests drive commands directly on an
//! `EngineState` built from an in-memory backend.
//!
//! | Operation | Views refreshed | Notification |
//! |-----------|-----------------|--------------|
//! | [`add`] | visible (prepend), pinned | `SnippetAdded` |
//! | [`delete`] | visible (re-slice), pinned | `SnippetDeleted` |
//! | [`restore`] | visible (prepend), pinned | `SnippetRestored` |
//! | [`pinning`] | pinned | none |
//! | [`search`] | visible | `SearchCompleted` |
//! | [`import`] | visible (re-slice), pinned | `ImportSucceeded` |
//! | [`save`] | none | `SaveSucceeded` / `SaveFailed` |
//! | [`view`] | visible | none |

use crate::error::Result;
use crate::model::Snippet;
use crate::notify::{Notification, NotificationSink};
use crate::store::backend::StorageBackend;
use crate::store::storage::SnippetStorage;
use crate::store::SnippetStore;
use crate::views::Views;

pub mod add;
pub mod delete;
pub mod import;
pub mod pinning;
pub mod restore;
pub mod save;
pub mod search;
pub mod view;

/// Everything one logical operation may touch.
pub struct EngineState<B: StorageBackend> {
    pub store: SnippetStore<B>,
    pub views: Views,
    sink: Box<dyn NotificationSink>,
}

impl<B: StorageBackend> EngineState<B> {
    pub fn new(store: SnippetStore<B>, sink: Box<dyn NotificationSink>, page_size: usize) -> Self {
        let views = Views::new(store.snippets(), page_size);
        Self { store, views, sink }
    }

    /// Opens the store on `backend` and derives the initial views.
    pub fn open(backend: B, sink: Box<dyn NotificationSink>, page_size: usize) -> Result<Self> {
        let store = SnippetStore::open(SnippetStorage::new(backend))?;
        Ok(Self::new(store, sink, page_size))
    }

    pub fn notify(&self, notification: Notification) {
        self.sink.push(notification);
    }

    pub fn snippets(&self) -> &[Snippet] {
        self.store.snippets()
    }

    pub(crate) fn refresh_visible(&mut self) {
        self.views.refresh_visible(self.store.snippets());
    }

    pub(crate) fn refresh_pinned(&mut self) {
        self.views.refresh_pinned(self.store.snippets());
    }
}
