//! # Configuration
//!
//! Engine configuration is loaded with [`confique`], layered in priority order:
//! 1. **Environment variables**: `SNIPVAULT_PAGE_SIZE`, `SNIPVAULT_SAVE_INTERVAL_MS`, ...
//! 2. **Config file**: an optional TOML file passed to [`EngineConfig::load`].
//! 3. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `12` | Snippets in the first visible page |
//! | `save_interval_ms` | `200000` | Autosave period; `0` disables autosave |
//! | `max_import_bytes` | `5242880` | Largest accepted import payload |

use crate::autosave::DEFAULT_SAVE_INTERVAL;
use crate::error::Result;
use crate::views::DEFAULT_PAGE_SIZE;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of snippets in the visible page.
    #[config(default = 12, env = "SNIPVAULT_PAGE_SIZE")]
    pub page_size: usize,

    /// Milliseconds between background saves. Zero turns autosave off.
    #[config(default = 200000, env = "SNIPVAULT_SAVE_INTERVAL_MS")]
    pub save_interval_ms: u64,

    /// Import payloads larger than this many bytes are rejected.
    #[config(default = 5242880, env = "SNIPVAULT_MAX_IMPORT_BYTES")]
    pub max_import_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            save_interval_ms: DEFAULT_SAVE_INTERVAL.as_millis() as u64,
            max_import_bytes: 5 * 1024 * 1024,
        }
    }
}

impl EngineConfig {
    /// Loads env, then `file` (skipped when it does not exist), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// The autosave period, or `None` when autosave is disabled.
    pub fn save_interval(&self) -> Option<Duration> {
        (self.save_interval_ms > 0).then(|| Duration::from_millis(self.save_interval_ms))
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_save_interval_ms(mut self, save_interval_ms: u64) -> Self {
        self.save_interval_ms = save_interval_ms;
        self
    }

    pub fn without_autosave(self) -> Self {
        self.with_save_interval_ms(0)
    }
}
