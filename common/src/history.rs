//! Linear undo/redo history for the document editor.
//!
//! Each entry is a full snapshot of the text. Recording a new snapshot after
//! undoing discards the redo tail. At most [`HISTORY_LIMIT`] snapshots are
//! kept; the oldest ones are dropped first.

use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHistory {
    entries: VecDeque<String>,
    index: usize,
    limit: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl EditHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_limit(initial, HISTORY_LIMIT)
    }

    /// History keeping at most `limit` snapshots (never fewer than one).
    pub fn with_limit(initial: impl Into<String>, limit: usize) -> Self {
        Self {
            entries: VecDeque::from([initial.into()]),
            index: 0,
            limit: limit.max(1),
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Records `text` unless it equals the current entry.
    /// Returns whether a new entry was added.
    pub fn record(&mut self, text: &str) -> bool {
        if self.current() == text {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push_back(text.to_string());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;
        true
    }

    pub fn undo(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_and_redo_walk_the_history() {
        let mut history = EditHistory::default();
        history.record("a");
        history.record("ab");

        assert_eq!(history.undo(), Some("a"));
        assert_eq!(history.undo(), Some(""));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some("a"));
        assert_eq!(history.redo(), Some("ab"));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn recording_after_undo_drops_redo_tail() {
        let mut history = EditHistory::default();
        history.record("one");
        history.record("two");
        history.undo();

        assert!(history.record("three"));
        assert!(!history.can_redo());
        assert_eq!(history.undo(), Some("one"));
    }

    #[test]
    fn duplicate_snapshots_are_ignored() {
        let mut history = EditHistory::new("same");
        assert!(!history.record("same"));
        assert!(!history.can_undo());
    }

    #[test]
    fn oldest_snapshots_are_dropped_past_the_limit() {
        let mut history = EditHistory::with_limit("", 3);
        for text in ["a", "ab", "abc", "abcd"] {
            history.record(text);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.current(), "abcd");
        assert_eq!(history.undo(), Some("abc"));
        assert_eq!(history.undo(), Some("ab"));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some("abc"));
    }

    #[test]
    fn default_limit_bounds_long_sessions() {
        let mut history = EditHistory::default();
        let mut text = String::new();
        for _ in 0..HISTORY_LIMIT * 3 {
            text.push('x');
            history.record(&text);
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        let mut undos = 0;
        while history.undo().is_some() {
            undos += 1;
        }
        assert_eq!(undos, HISTORY_LIMIT - 1);
    }
}
