use super::backend::StorageBackend;
use crate::error::{Result, SnipError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct MemState {
    values: HashMap<String, String>,
    simulate_write_error: bool,
    simulate_persist_rejection: bool,
    durability_unsupported: bool,
    writes: usize,
}

/// In-memory storage backend.
///
/// Clones share the same underlying map, so a test can hand one clone to an engine and
/// keep another to inspect what was written. The map sits behind a `Mutex` because the
/// engine's autosave thread writes through the same backend.
#[derive(Clone, Default)]
pub struct MemBackend {
    state: Arc<Mutex<MemState>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose `persist` reports that durability cannot be confirmed.
    pub fn without_durability() -> Self {
        let backend = Self::new();
        backend.lock().durability_unsupported = true;
        backend
    }

    fn lock(&self) -> MutexGuard<'_, MemState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.lock().simulate_write_error = simulate;
    }

    /// Make `persist` reject, as a browser does when persistent storage is denied.
    pub fn set_simulate_persist_rejection(&self, simulate: bool) {
        self.lock().simulate_persist_rejection = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }
}

impl StorageBackend for MemBackend {
    fn contains_key(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock().values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.lock();
        if state.simulate_write_error {
            return Err(SnipError::Store("Simulated write error".to_string()));
        }
        state.values.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }

    fn persist(&self) -> Option<Result<()>> {
        let state = self.lock();
        if state.durability_unsupported {
            return None;
        }
        if state.simulate_persist_rejection {
            return Some(Err(SnipError::PersistRejected(
                "Simulated persist rejection".to_string(),
            )));
        }
        Some(Ok(()))
    }
}
