use super::EngineState;
use crate::error::{Result, SnipError};
use crate::model::ImportPayload;
use crate::notify::Notification;
use crate::store::backend::StorageBackend;
use crate::store::generate_id;
use chrono::Utc;

/// Imports one or many snippets ahead of the existing collection. Returns how many were
/// imported.
///
/// The batch is ordered newest first by its own timestamps, then every snippet gets a new
/// id and a timestamp of `now + (len - position)`, so the batch keeps its order and sorts
/// ahead of everything stamped `now` or earlier.
pub fn run<B: StorageBackend>(state: &mut EngineState<B>, payload: ImportPayload) -> usize {
    let mut batch = payload.into_snippets();
    batch.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let now = Utc::now().timestamp_millis();
    let len = batch.len();
    for (position, snippet) in batch.iter_mut().enumerate() {
        snippet.id = generate_id();
        snippet.showing = true;
        snippet.timestamp = now + (len - position) as i64;
    }

    state.store.prepend(batch);
    if let Err(e) = state.store.save() {
        tracing::warn!(error = %e, "failed to persist import");
    }
    state.refresh_visible();
    state.refresh_pinned();
    state.notify(Notification::ImportSucceeded);
    tracing::info!(count = len, "snippets imported");
    len
}

/// Validates a raw import document before importing it.
///
/// Oversized or malformed input is reported with `ImportTooBig` / `ImportFailed` and
/// leaves the collection untouched.
pub fn run_json<B: StorageBackend>(
    state: &mut EngineState<B>,
    raw: &str,
    max_bytes: usize,
) -> Result<usize> {
    if raw.len() > max_bytes {
        state.notify(Notification::ImportTooBig);
        return Err(SnipError::ImportTooBig {
            size: raw.len(),
            limit: max_bytes,
        });
    }
    match ImportPayload::from_json(raw) {
        Ok(payload) => Ok(run(state, payload)),
        Err(e) => {
            state.notify(Notification::ImportFailed);
            tracing::warn!(error = %e, "rejected import payload");
            Err(e)
        }
    }
}

/// Whether the snippet behind `id` may be imported without creating a duplicate.
/// Duplicate detection does not exist yet, so the answer is always unknown.
pub fn can_import(_id: &str) -> Option<bool> {
    None
}
