//! Bounded, newest-first log of status lines

use std::collections::VecDeque;

use crate::consts::STATUS_LOG_CAPACITY;

use super::types::StatusEntry;

/// Receives the log after every push so it can be redrawn
pub(crate) trait StatusDisplay {
    fn refresh(&mut self, log: &StatusLog);
}

/// Display that draws nothing
pub(crate) struct NoDisplay;

impl StatusDisplay for NoDisplay {
    fn refresh(&mut self, _log: &StatusLog) {}
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLog {
    lines: VecDeque<StatusEntry>,
    capacity: usize,
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLog {
    pub(crate) fn new() -> Self {
        Self::with_capacity(STATUS_LOG_CAPACITY)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        StatusLog {
            lines: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Insert at the front, evicting the oldest line once full
    pub(crate) fn push(&mut self, entry: StatusEntry) {
        self.lines.push_front(entry);
        self.lines.truncate(self.capacity);
    }

    /// Entries newest first
    pub(crate) fn render(&self) -> Vec<&StatusEntry> {
        self.lines.iter().collect()
    }

    /// Newline-joined panel text, newest line first
    pub(crate) fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(StatusEntry::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(log: &StatusLog) -> Vec<&str> {
        log.render().into_iter().map(StatusEntry::as_str).collect()
    }

    #[test]
    fn push_puts_newest_first() {
        let mut log = StatusLog::new();
        log.push(StatusEntry::new("one"));
        log.push(StatusEntry::new("two"));
        assert_eq!(lines(&log), vec!["two", "one"]);
        assert_eq!(log.to_text(), "two\none");
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut log = StatusLog::new();
        for i in 0..15 {
            log.push(StatusEntry::new(format!("line {i}")));
            assert!(log.len() <= STATUS_LOG_CAPACITY);
        }
        assert_eq!(log.len(), 12);
        let rendered = lines(&log);
        assert_eq!(rendered[0], "line 14");
        assert_eq!(rendered[11], "line 3");
        assert!(!rendered.contains(&"line 2"));
    }

    #[test]
    fn render_is_idempotent() {
        let mut log = StatusLog::new();
        log.push(StatusEntry::new("a"));
        log.push(StatusEntry::new("b"));
        assert_eq!(log.render(), log.render());
        assert_eq!(log.to_text(), log.to_text());
    }

    #[test]
    fn empty_log_renders_empty_text() {
        let log = StatusLog::new();
        assert!(log.is_empty());
        assert_eq!(log.to_text(), "");
    }

    #[test]
    fn custom_capacity() {
        let mut log = StatusLog::with_capacity(2);
        log.push(StatusEntry::new("a"));
        log.push(StatusEntry::new("b"));
        log.push(StatusEntry::new("c"));
        assert_eq!(lines(&log), vec!["c", "b"]);
    }
}
