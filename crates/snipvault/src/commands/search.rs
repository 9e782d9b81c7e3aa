use super::EngineState;
use crate::model::SearchParameters;
use crate::notify::Notification;
use crate::search::{self, SearchOutcome};
use crate::store::backend::StorageBackend;

/// Scores and reorders the collection for `params`, then refreshes the visible page.
///
/// With `persist_as_active`, `params` also become the published current search (a repeat
/// of the current parameters is not republished).
pub fn run<B: StorageBackend>(
    state: &mut EngineState<B>,
    params: SearchParameters,
    persist_as_active: bool,
) -> SearchOutcome {
    let outcome = search::rank(state.store.snippets_mut(), &params);
    if persist_as_active {
        state.views.set_search(params);
    }
    state.refresh_visible();
    state.notify(Notification::SearchCompleted);
    tracing::debug!(
        terms = outcome.terms,
        showing = outcome.showing,
        "search completed"
    );
    outcome
}
