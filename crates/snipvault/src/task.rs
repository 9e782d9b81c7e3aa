use crate::error::{Result, SnipError};
use std::thread::{self, JoinHandle};

/// A named worker thread paired with a stop channel.
///
/// The thread receives the stop receiver and must return once it disconnects. Stopping
/// drops the sender, then joins.
pub struct BackgroundTask {
    name: String,
    stop: Option<flume::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl BackgroundTask {
    pub fn spawn<F>(name: &str, body: F) -> Result<Self>
    where
        F: FnOnce(flume::Receiver<()>) + Send + 'static,
    {
        let (stop_tx, stop_rx) = flume::bounded(1);
        let thread = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || body(stop_rx))
            .map_err(SnipError::Io)?;
        tracing::debug!(task = name, "background task started");

        Ok(Self {
            name: name.to_string(),
            stop: Some(stop_tx),
            thread: Some(thread),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_running(&self) -> bool {
        self.thread
            .as_ref()
            .is_some_and(|thread| !thread.is_finished())
    }

    /// Signals the thread and waits for it. Calling it again does nothing.
    pub fn stop(&mut self) {
        drop(self.stop.take());
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!(task = %self.name, "background task panicked");
            }
            tracing::debug!(task = %self.name, "background task stopped");
        }
    }
}

impl Drop for BackgroundTask {
    fn drop(&mut self) {
        self.stop();
    }
}
