use super::{add, EngineState};
use crate::notify::Notification;
use crate::store::backend::StorageBackend;

/// Undoes the most recent delete. Returns `false` (and does nothing) when the deleted
/// stack is empty.
pub fn run<B: StorageBackend>(state: &mut EngineState<B>) -> bool {
    let Some(id) = state.store.undo() else {
        return false;
    };
    add::show_inserted(state);
    state.notify(Notification::SnippetRestored);
    tracing::debug!(id = %id, "snippet restored");
    true
}
