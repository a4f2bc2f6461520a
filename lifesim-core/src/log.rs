//! The in-game event log.
//!
//! An append-only list of short entries stamped with the in-game date,
//! newest first. Clearing the log never touches player state.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries retained before the oldest are dropped.
const LOG_CAPACITY: usize = 200;

/// A single log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Player age when the entry was written.
    pub age: u32,
    /// In-game month when the entry was written.
    pub month: u32,
    pub text: String,
}

impl LogEntry {
    /// Short date stamp for display, e.g. `3y 11m`.
    pub fn stamp(&self) -> String {
        format!("{}y {}m", self.age, self.month)
    }
}

/// The game log, newest entry first.
#[derive(Debug, Clone, Default)]
pub struct GameLog {
    entries: VecDeque<LogEntry>,
    total_pushed: u64,
}

impl GameLog {
    pub fn new() -> GameLog {
        GameLog::default()
    }

    /// Prepend an entry, dropping the oldest past capacity.
    pub fn push(&mut self, age: u32, month: u32, text: impl Into<String>) {
        self.entries.push_front(LogEntry {
            age,
            month,
            text: text.into(),
        });
        self.total_pushed += 1;
        if self.entries.len() > LOG_CAPACITY {
            self.entries.pop_back();
        }
    }

    /// Monotonic count of every entry ever pushed, surviving eviction.
    ///
    /// Front-ends diff this across an operation to echo exactly the
    /// entries it produced.
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    /// Entries in display order (newest first).
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = GameLog::new();
        log.push(0, 1, "first");
        log.push(0, 2, "second");

        let texts: Vec<&str> = log.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert_eq!(log.latest().map(|e| e.text.as_str()), Some("second"));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = GameLog::new();
        for i in 0..(LOG_CAPACITY + 10) {
            log.push(0, 1, format!("entry {i}"));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        // The oldest entries are gone, the newest survives.
        assert_eq!(
            log.latest().map(|e| e.text.clone()),
            Some(format!("entry {}", LOG_CAPACITY + 9))
        );
    }

    #[test]
    fn test_clear() {
        let mut log = GameLog::new();
        log.push(1, 1, "something");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_total_pushed_survives_eviction_and_clear() {
        let mut log = GameLog::new();
        for i in 0..(LOG_CAPACITY + 5) {
            log.push(0, 1, format!("entry {i}"));
        }
        assert_eq!(log.total_pushed(), (LOG_CAPACITY + 5) as u64);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.total_pushed(), (LOG_CAPACITY + 5) as u64);
    }

    #[test]
    fn test_stamp_format() {
        let entry = LogEntry {
            age: 7,
            month: 12,
            text: "x".to_string(),
        };
        assert_eq!(entry.stamp(), "7y 12m");
    }
}
