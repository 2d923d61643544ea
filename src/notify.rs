//! Consumers of game event messages.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Receives event messages from the board, such as ship-sunk notices.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Text announced when a ship goes down.
pub fn sunk_message(name: &str) -> String {
    format!("You sank the {}!", name)
}

/// Keeps every message it receives, in arrival order.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(feature = "std")]
impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[cfg(feature = "std")]
impl NotificationSink for MessageLog {
    fn notify(&self, message: &str) {
        let mut guard = match self.messages.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(message.to_string());
    }
}
