//! User-facing notifications.
//!
//! The editor reports outcomes as short toast-style messages. Where they end
//! up is the embedder's choice: [`LogNotifier`] routes them into `tracing`,
//! [`MemoryNotifier`] keeps them for a UI to drain (and for tests).

use std::fmt;
use tracing::{error, info, warn};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Neutral status.
    Info,
    /// An operation completed.
    Success,
    /// An operation was refused, e.g. nothing loaded.
    Warning,
    /// An operation failed.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
        };
        f.write_str(s)
    }
}

/// Sink for editor notifications.
pub trait Notifier {
    /// Delivers one message.
    fn notify(&mut self, level: Level, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, level: Level, message: &str) {
        (**self).notify(level, message);
    }
}

/// Forwards notifications to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => info!(target: "photon::notify", "{}", message),
            Level::Success => info!(target: "photon::notify", success = true, "{}", message),
            Level::Warning => warn!(target: "photon::notify", "{}", message),
            Level::Error => error!(target: "photon::notify", "{}", message),
        }
    }
}

/// Keeps every notification in order.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    messages: Vec<(Level, String)>,
}

impl MemoryNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages so far, oldest first.
    pub fn messages(&self) -> &[(Level, String)] {
        &self.messages
    }

    /// The most recent message.
    pub fn last(&self) -> Option<&(Level, String)> {
        self.messages.last()
    }

    /// Number of messages at `level`.
    pub fn count(&self, level: Level) -> usize {
        self.messages.iter().filter(|(l, _)| *l == level).count()
    }

    /// Removes and returns all messages.
    pub fn drain(&mut self) -> Vec<(Level, String)> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}
