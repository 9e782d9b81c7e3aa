use crate::commands::EngineState;
use crate::model::Snippet;
use crate::notify::{ChannelSink, Notification};
use crate::store::mem_backend::MemBackend;
use crate::store::storage::SnippetStorage;
use crate::views::DEFAULT_PAGE_SIZE;

/// An engine state over a shared in-memory backend, with its notifications captured.
pub struct StateFixture {
    pub state: EngineState<MemBackend>,
    pub backend: MemBackend,
    pub notifications: flume::Receiver<Notification>,
}

impl Default for StateFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StateFixture {
    pub fn new() -> Self {
        Self::with_snippets(Vec::new())
    }

    /// Seeds storage with `snippets` (ids are kept as given) before opening the state.
    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        Self::with_snippets_and_page_size(snippets, DEFAULT_PAGE_SIZE)
    }

    pub fn with_snippets_and_page_size(snippets: Vec<Snippet>, page_size: usize) -> Self {
        let backend = MemBackend::new();
        SnippetStorage::new(backend.clone())
            .save_snippets(&snippets)
            .expect("seeding in-memory storage");
        let (sink, notifications) = ChannelSink::unbounded();
        let state = EngineState::open(backend.clone(), Box::new(sink), page_size)
            .expect("opening seeded state");
        Self {
            state,
            backend,
            notifications,
        }
    }

    /// Notifications emitted since the last call.
    pub fn drain(&self) -> Vec<Notification> {
        self.notifications.try_iter().collect()
    }

    pub fn stored(&self) -> Vec<Snippet> {
        SnippetStorage::new(self.backend.clone())
            .snippets()
            .expect("reading in-memory storage")
    }
}

/// `count` snippets with ids `"0"..count` whose default order is their id order.
pub fn numbered_snippets(count: usize) -> Vec<Snippet> {
    (0..count)
        .map(|i| {
            let mut snippet = Snippet::new(format!("Snippet {}", i), format!("code {}", i))
                .with_timestamp(1_000_000 - i as i64);
            snippet.id = i.to_string();
            snippet
        })
        .collect()
}

pub fn with_id(mut snippet: Snippet, id: &str) -> Snippet {
    snippet.id = id.to_string();
    snippet
}
