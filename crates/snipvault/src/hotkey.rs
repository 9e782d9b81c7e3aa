//! Global hotkey signals.
//!
//! The engine subscribes to a channel of [`HotKey`] events for its whole lifetime and runs
//! an undo for every [`HotKey::Undo`]. Other keys belong to the UI and are ignored here.

use crate::error::Result;
use crate::task::BackgroundTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotKey {
    Undo,
    Copy,
    Search,
}

enum Wake {
    Key(HotKey),
    Stop,
}

/// Spawns the listener. It ends when the task is stopped or every hotkey sender is gone.
pub fn listen<F>(hotkeys: flume::Receiver<HotKey>, mut on_undo: F) -> Result<BackgroundTask>
where
    F: FnMut() + Send + 'static,
{
    BackgroundTask::spawn("snipvault-hotkeys", move |stop| loop {
        let wake = flume::Selector::new()
            .recv(&hotkeys, |key| key.map_or(Wake::Stop, Wake::Key))
            .recv(&stop, |_| Wake::Stop)
            .wait();
        match wake {
            Wake::Key(HotKey::Undo) => on_undo(),
            Wake::Key(other) => tracing::trace!(key = ?other, "ignoring hotkey"),
            Wake::Stop => break,
        }
    })
}
