//! User-facing notifications ("toasts").
//!
//! Every engine operation that changes what the user sees pushes exactly one
//! [`Notification`] into a [`NotificationSink`]. Sinks are fire-and-forget.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    CopyFailed,
    CopySucceeded,
    SaveSucceeded,
    Saving,
    SaveFailed,
    ImportSucceeded,
    ImportFailed,
    ImportTooBig,
    SnippetAdded,
    SnippetDeleted,
    SnippetRestored,
    SearchCompleted,
    Welcome,
    Empty,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::CopyFailed => "Copy Failed",
            Notification::CopySucceeded => "Copy Succeeded",
            Notification::SaveSucceeded => "Save Succeeded",
            Notification::Saving => "Saving...",
            Notification::SaveFailed => "Save Failed",
            Notification::ImportSucceeded => "Import Succeeded",
            Notification::ImportFailed => "Import Failed",
            Notification::ImportTooBig => "File Too Big!",
            Notification::SnippetAdded => "Snippet Added",
            Notification::SnippetDeleted => "Snippet Deleted",
            Notification::SnippetRestored => "Snippet Restored",
            Notification::SearchCompleted => "Search Completed",
            Notification::Welcome => "Welcome",
            Notification::Empty => "",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub trait NotificationSink: Send {
    fn push(&self, notification: Notification);
}

/// Forwards notifications over a channel. A dropped receiver is ignored.
pub struct ChannelSink {
    sender: flume::Sender<Notification>,
}

impl ChannelSink {
    pub fn new(sender: flume::Sender<Notification>) -> Self {
        Self { sender }
    }

    /// A sink together with the receiving end of its (unbounded) channel.
    pub fn unbounded() -> (Self, flume::Receiver<Notification>) {
        let (sender, receiver) = flume::unbounded();
        (Self::new(sender), receiver)
    }
}

impl NotificationSink for ChannelSink {
    fn push(&self, notification: Notification) {
        let _ = self.sender.send(notification);
    }
}

/// Records notifications in the log and nowhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn push(&self, notification: Notification) {
        if notification != Notification::Empty {
            tracing::info!(notification = %notification, "notification");
        }
    }
}
