//! # snipvault
//!
//! A UI-agnostic engine for a personal collection of code snippets: titled blocks of code
//! with notes, tags and optional supplements. It keeps the collection ordered, searches
//! it with a relevance score, pages it into a visible window, tracks pinned snippets,
//! supports undo of deletion, imports JSON batches and persists everything to a
//! key/value store on a background timer.
//!
//! ## Architecture
//!
//! ```text
//! UI (any) ──► api::SnippetEngine ──► commands::* ──► store::SnippetStore ──► StorageBackend
//!                   │                     │
//!                   │                     └──► views::Views ──► subscribers (flume)
//!                   │                     └──► notify::NotificationSink
//!                   ├──► autosave timer  (task::BackgroundTask)
//!                   └──► hotkey listener (task::BackgroundTask)
//! ```
//!
//! - [`api`]: the facade. Holds the engine lock and owns the background tasks.
//! - [`commands`]: one module per operation, each mutating state then republishing views.
//! - [`store`]: the in-memory collection, the undo stack and the storage backends.
//! - [`ordering`] and [`search`]: the default sort cascade and relevance ranking.
//! - [`views`]: replay-latest subjects for the visible page, pinned list and search request.
//!
//! ## Quick Start
//!
//! ```no_run
//! use snipvault::{EngineConfig, FsBackend, LogSink, Snippet, SnippetEngine};
//!
//! # fn main() -> snipvault::Result<()> {
//! let backend = FsBackend::new(FsBackend::default_root()?);
//! let engine = SnippetEngine::new(backend, LogSink, EngineConfig::load(None)?)?;
//! let id = engine.add_snippet(Snippet::new("Read a file", "fs::read_to_string(p)?"));
//! engine.pin_snippet(&id)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod autosave;
pub mod commands;
pub mod config;
pub mod error;
pub mod hotkey;
pub mod model;
pub mod notify;
pub mod ordering;
pub mod search;
pub mod store;
pub mod task;
pub mod views;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use api::SnippetEngine;
pub use config::EngineConfig;
pub use error::{Result, SnipError};
pub use hotkey::HotKey;
pub use model::{ImportPayload, SearchParameters, Snippet, Style, Supplement};
pub use notify::{ChannelSink, LogSink, Notification, NotificationSink};
pub use search::SearchOutcome;
pub use store::backend::StorageBackend;
pub use store::fs_backend::FsBackend;
pub use store::mem_backend::MemBackend;
pub use views::Snapshot;
