use super::EngineState;
use crate::error::Result;
use crate::notify::Notification;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(state: &mut EngineState<B>, id: &str) -> Result<()> {
    let removed = state.store.delete(id)?;
    state.refresh_visible();
    state.refresh_pinned();
    state.notify(Notification::SnippetDeleted);
    tracing::debug!(id, count = removed.len(), "snippet deleted");
    Ok(())
}
