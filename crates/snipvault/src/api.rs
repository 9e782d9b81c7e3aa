//! # API Facade
//!
//! [`SnippetEngine`] is the single entry point for every snipvault operation, regardless of
//! the UI driving it.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the command functions in [`crate::commands`]
//! - **Serializes** operations: all state sits behind one mutex, held for the full duration
//!   of each call, so a subscriber never observes half of an operation
//! - **Owns the background tasks**: the autosave timer and the hotkey undo listener
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Rendering**: It returns snapshots and plain values, never strings for display
//!
//! ## Lifecycle
//!
//! ```text
//! new()  ──► autosave timer running (unless the interval is 0)
//!   │
//!   ├─ listen_for_hotkeys(rx) ──► undo listener running
//!   │
//! shutdown() / drop ──► both tasks stopped and joined, no further notifications
//! ```
//!
//! ## Generic Over StorageBackend
//!
//! `SnippetEngine<B: StorageBackend>` is generic over the storage backend:
//! - Production: `SnippetEngine<FsBackend>`
//! - Testing: `SnippetEngine<MemBackend>`

use crate::autosave;
use crate::commands::{self, EngineState};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::hotkey::{self, HotKey};
use crate::model::{ImportPayload, SearchParameters, Snippet, Style};
use crate::notify::NotificationSink;
use crate::search::SearchOutcome;
use crate::store::backend::StorageBackend;
use crate::task::BackgroundTask;
use crate::views::Snapshot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedState<B> = Arc<Mutex<EngineState<B>>>;

fn lock<B: StorageBackend>(state: &Mutex<EngineState<B>>) -> MutexGuard<'_, EngineState<B>> {
    // A panic mid-operation leaves the in-memory state as the best data there is.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct SnippetEngine<B: StorageBackend + 'static> {
    state: SharedState<B>,
    config: EngineConfig,
    autosave: Option<BackgroundTask>,
    hotkeys: Option<BackgroundTask>,
}

impl<B: StorageBackend + 'static> SnippetEngine<B> {
    /// Loads the collection from `backend` and starts the autosave timer.
    pub fn new(
        backend: B,
        sink: impl NotificationSink + 'static,
        config: EngineConfig,
    ) -> Result<Self> {
        let state = EngineState::open(backend, Box::new(sink), config.page_size)?;
        let state: SharedState<B> = Arc::new(Mutex::new(state));

        let autosave = match config.save_interval() {
            Some(interval) => {
                let shared = Arc::clone(&state);
                Some(autosave::spawn(interval, move || {
                    commands::save::run(&lock(&shared));
                })?)
            }
            None => None,
        };

        Ok(Self {
            state,
            config,
            autosave,
            hotkeys: None,
        })
    }

    /// Subscribes to hotkey events for the rest of the engine's life. Every
    /// [`HotKey::Undo`] runs [`Self::undo_delete`]. Replaces any previous subscription.
    pub fn listen_for_hotkeys(&mut self, hotkeys: flume::Receiver<HotKey>) -> Result<()> {
        if let Some(mut previous) = self.hotkeys.take() {
            previous.stop();
        }
        let shared = Arc::clone(&self.state);
        self.hotkeys = Some(hotkey::listen(hotkeys, move || {
            commands::restore::run(&mut lock(&shared));
        })?);
        Ok(())
    }

    /// Stops the autosave timer and the hotkey listener. Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        if let Some(mut task) = self.autosave.take() {
            task.stop();
        }
        if let Some(mut task) = self.hotkeys.take() {
            task.stop();
        }
    }

    pub fn is_autosaving(&self) -> bool {
        self.autosave.as_ref().is_some_and(BackgroundTask::is_running)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn state(&self) -> MutexGuard<'_, EngineState<B>> {
        lock(&self.state)
    }

    // --- Mutations ---

    pub fn add_snippet(&self, snippet: Snippet) -> String {
        commands::add::run(&mut self.state(), snippet)
    }

    pub fn delete_snippet(&self, id: &str) -> Result<()> {
        commands::delete::run(&mut self.state(), id)
    }

    pub fn undo_delete(&self) -> bool {
        commands::restore::run(&mut self.state())
    }

    pub fn pin_snippet(&self, id: &str) -> Result<()> {
        commands::pinning::pin(&mut self.state(), id)
    }

    pub fn unpin_snippet(&self, id: &str) -> Result<()> {
        commands::pinning::unpin(&mut self.state(), id)
    }

    pub fn refresh_pinned(&self) {
        commands::pinning::refresh(&mut self.state());
    }

    pub fn on_pinned_selected(&self, id: &str) -> Result<()> {
        commands::pinning::select(&mut self.state(), id)
    }

    pub fn search(&self, params: SearchParameters, persist_as_active: bool) -> SearchOutcome {
        commands::search::run(&mut self.state(), params, persist_as_active)
    }

    pub fn import(&self, payload: impl Into<ImportPayload>) -> usize {
        commands::import::run(&mut self.state(), payload.into())
    }

    pub fn import_json(&self, raw: &str) -> Result<usize> {
        commands::import::run_json(&mut self.state(), raw, self.config.max_import_bytes)
    }

    pub fn can_import(&self, id: &str) -> Option<bool> {
        commands::import::can_import(id)
    }

    pub fn save(&self) {
        commands::save::run(&self.state());
    }

    pub fn style(&self, default: Style) -> Result<Style> {
        commands::save::style(&self.state(), default)
    }

    pub fn save_style(&self, style: &Style) {
        commands::save::save_style(&self.state(), style);
    }

    // --- Views ---

    pub fn load_remaining(&self) {
        commands::view::load_remaining(&mut self.state());
    }

    pub fn has_more(&self, threshold: usize) -> bool {
        commands::view::has_more(&self.state(), threshold)
    }

    pub fn visible(&self) -> Snapshot {
        self.state().views.visible()
    }

    pub fn pinned(&self) -> Snapshot {
        self.state().views.pinned()
    }

    pub fn search_parameters(&self) -> SearchParameters {
        self.state().views.search_parameters().clone()
    }

    pub fn subscribe_visible(&self) -> flume::Receiver<Snapshot> {
        self.state().views.subscribe_visible()
    }

    pub fn subscribe_pinned(&self) -> flume::Receiver<Snapshot> {
        self.state().views.subscribe_pinned()
    }

    pub fn subscribe_search_parameters(&self) -> flume::Receiver<SearchParameters> {
        self.state().views.subscribe_search()
    }

    // --- Lookups ---

    pub fn all_snippets(&self) -> Vec<Snippet> {
        self.state().snippets().to_vec()
    }

    pub fn snippet_by_id(&self, id: &str) -> Result<Snippet> {
        self.state().store.by_id(id).cloned()
    }

    pub fn deleted_count(&self) -> usize {
        self.state().store.deleted_len()
    }
}

impl<B: StorageBackend + 'static> Drop for SnippetEngine<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
