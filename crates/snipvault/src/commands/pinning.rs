use super::EngineState;
use crate::error::Result;
use crate::store::backend::StorageBackend;

pub fn pin<B: StorageBackend>(state: &mut EngineState<B>, id: &str) -> Result<()> {
    pin_state(state, id, true)
}

pub fn unpin<B: StorageBackend>(state: &mut EngineState<B>, id: &str) -> Result<()> {
    pin_state(state, id, false)
}

fn pin_state<B: StorageBackend>(state: &mut EngineState<B>, id: &str, pinned: bool) -> Result<()> {
    state.store.by_id_mut(id)?.pinned = pinned;
    state.refresh_pinned();
    Ok(())
}

/// Republishes the pinned view, e.g. after a pinned snippet's title was edited.
pub fn refresh<B: StorageBackend>(state: &mut EngineState<B>) {
    state.refresh_pinned();
}

/// Jumps to a pinned snippet: marks it showing and moves it to the top of the visible list
/// without running a search.
pub fn select<B: StorageBackend>(state: &mut EngineState<B>, id: &str) -> Result<()> {
    let snippet = state.store.by_id_mut(id)?;
    snippet.showing = true;
    let selected = snippet.clone();
    state.views.promote(selected);
    Ok(())
}
