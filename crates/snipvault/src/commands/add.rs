use super::EngineState;
use crate::model::Snippet;
use crate::notify::Notification;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(state: &mut EngineState<B>, snippet: Snippet) -> String {
    let id = state.store.add(snippet);
    show_inserted(state);
    state.notify(Notification::SnippetAdded);
    tracing::debug!(id = %id, "snippet added");
    id
}

/// Puts the snippet just inserted at the front of the collection on screen.
pub(crate) fn show_inserted<B: StorageBackend>(state: &mut EngineState<B>) {
    if let Some(inserted) = state.store.snippets().first().cloned() {
        state.views.prepend_visible(inserted);
    }
    state.refresh_pinned();
}
