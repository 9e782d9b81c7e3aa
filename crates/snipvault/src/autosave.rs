//! Periodic background save.
//!
//! The timer is a [`BackgroundTask`] that waits on its stop channel with a timeout equal to
//! the save interval. Each timeout runs one tick; a disconnect ends the loop, so once
//! [`BackgroundTask::stop`] returns no further tick can run.

use crate::error::Result;
use crate::task::BackgroundTask;
use std::time::Duration;

pub const DEFAULT_SAVE_INTERVAL: Duration = Duration::from_millis(200_000);

pub fn spawn<F>(interval: Duration, mut tick: F) -> Result<BackgroundTask>
where
    F: FnMut() + Send + 'static,
{
    BackgroundTask::spawn("snipvault-autosave", move |stop| loop {
        match stop.recv_timeout(interval) {
            Err(flume::RecvTimeoutError::Timeout) => tick(),
            Ok(()) | Err(flume::RecvTimeoutError::Disconnected) => break,
        }
    })
}
