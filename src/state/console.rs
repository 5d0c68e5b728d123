// In-session activity log.
// Records placeholder actions and form errors; the newest entry feeds the status bar.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// Console message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
}

/// A single activity log entry.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    pub level: ConsoleLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsoleMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ConsoleLevel::Warn, message)
    }

    fn new(level: ConsoleLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded activity log. Oldest entries drop off once full.
#[derive(Debug)]
pub struct ActivityLog {
    messages: VecDeque<ConsoleMessage>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl ActivityLog {
    const DEFAULT_CAPACITY: usize = 200;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, message: ConsoleMessage) {
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        self.push(ConsoleMessage::info(message));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.push(ConsoleMessage::warn(message));
    }

    /// Most recent message, if any.
    pub fn latest(&self) -> Option<&ConsoleMessage> {
        self.messages.back()
    }

    /// Messages oldest first.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &ConsoleMessage> {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_tracks_last_push() {
        let mut log = ActivityLog::default();
        assert!(log.latest().is_none());

        log.info("first");
        log.warn("second");

        let latest = log.latest().unwrap();
        assert_eq!(latest.level, ConsoleLevel::Warn);
        assert_eq!(latest.message, "second");
        assert_eq!(log.iter().count(), 2);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = ActivityLog::with_capacity(2);
        log.info("a");
        log.info("b");
        log.warn("c");

        let messages: Vec<&str> = log.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }
}
