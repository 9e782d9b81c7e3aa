//! # Domain Model
//!
//! This module defines the core data structures for snipvault: [`Snippet`], [`Supplement`],
//! [`SearchParameters`], [`Style`] and [`ImportPayload`].
//!
//! ## Snippet Records
//!
//! A snippet is the unit of storage. Its JSON shape is the persisted format:
//!
//! ```text
//! {
//!   "id": "3f1c…",          <-- assigned on insertion, never changes afterwards
//!   "title": "Read a file",
//!   "code": "fs::read_to_string(p)?",
//!   "notes": "std only",
//!   "tags": "rust, io",     <-- comma separated, compared trimmed and uppercased
//!   "index": 0,             <-- user ordering hint, lower sorts first
//!   "timestamp": 1700000000000,
//!   "pinned": false,
//!   "showing": true,        <-- transient search match flag
//!   "supplements": [{ "code": "...", "notes": "..." }]
//! }
//! ```
//!
//! Every field except `title` is optional on input. Hand-written import files and
//! older stored collections routinely omit `id`, `supplements` or `showing`, so missing
//! fields fall back to empty values (and `showing` to `true`).
//!
//! ## Showing Is Not State
//!
//! `showing` only describes the result of the most recent search. It is serialized because
//! it is part of the record, but the store resets it on load.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_showing() -> bool {
    true
}

/// Additional `{code, notes}` block attached to a snippet. Searched like the main body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplement {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub notes: String,
}

impl Supplement {
    pub fn new(code: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            notes: notes.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub index: i64,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default = "default_showing")]
    pub showing: bool,
    #[serde(default)]
    pub supplements: Vec<Supplement>,
}

impl Snippet {
    /// Creates an unsaved snippet stamped with the current time. The id stays empty until
    /// the store assigns one.
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            code: code.into(),
            notes: String::new(),
            tags: String::new(),
            index: 0,
            timestamp: Utc::now().timestamp_millis(),
            pinned: false,
            showing: true,
            supplements: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_index(mut self, index: i64) -> Self {
        self.index = index;
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_supplement(mut self, supplement: Supplement) -> Self {
        self.supplements.push(supplement);
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Tags as entered, split on `,` and trimmed. Empty entries are dropped.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    }
}

/// A search request. Equality is structural, which lets the views skip republishing an
/// identical request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Raw comma-delimited term string.
    pub query: String,
    pub title: bool,
    pub tags: bool,
    pub code: bool,
    pub notes: bool,
}

impl SearchParameters {
    /// Query with every field participating in scoring.
    pub fn all(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            title: true,
            tags: true,
            code: true,
            notes: true,
        }
    }
}

/// Display style document. The engine never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(pub serde_json::Value);

impl Default for Style {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl Style {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    /// Two-space indented JSON, the form shown in the style editor.
    pub fn to_pretty_json(&self) -> String {
        // Serializing a `Value` cannot fail.
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

/// An import file holds either a single snippet or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportPayload {
    Many(Vec<Snippet>),
    One(Snippet),
}

impl ImportPayload {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn into_snippets(self) -> Vec<Snippet> {
        match self {
            ImportPayload::Many(snippets) => snippets,
            ImportPayload::One(snippet) => vec![snippet],
        }
    }
}

impl From<Snippet> for ImportPayload {
    fn from(snippet: Snippet) -> Self {
        ImportPayload::One(snippet)
    }
}

impl From<Vec<Snippet>> for ImportPayload {
    fn from(snippets: Vec<Snippet>) -> Self {
        ImportPayload::Many(snippets)
    }
}
