use super::EngineState;
use crate::store::backend::StorageBackend;
use crate::views;

/// Replaces the visible page with the entire collection ("show all").
pub fn load_remaining<B: StorageBackend>(state: &mut EngineState<B>) {
    state.views.show_all(state.store.snippets());
}

pub fn has_more<B: StorageBackend>(state: &EngineState<B>, threshold: usize) -> bool {
    views::has_more(state.store.snippets(), threshold)
}
