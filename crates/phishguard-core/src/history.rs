//! Recent checks of the current session, most recent first.

use std::collections::VecDeque;

use crate::verdict::{Label, Verdict};

/// Number of checks kept.
pub const HISTORY_CAPACITY: usize = 5;

/// Placeholder shown when nothing has been checked yet.
pub const EMPTY_HISTORY_TEXT: &str = "No URLs checked yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub label: Label,
}

impl HistoryEntry {
    pub fn is_phishing(&self) -> bool {
        self.label == Label::Phishing
    }
}

impl From<&Verdict> for HistoryEntry {
    fn from(v: &Verdict) -> Self {
        Self {
            url: v.url.clone(),
            label: v.label,
        }
    }
}

/// Bounded list of recent checks. Never persisted.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend an entry, evicting the oldest ones past capacity.
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        self.entries.push_front(entry);
        let mut evicted = None;
        while self.entries.len() > self.capacity {
            evicted = self.entries.pop_back();
        }
        evicted
    }

    pub fn record(&mut self, verdict: &Verdict) -> Option<HistoryEntry> {
        self.push(HistoryEntry::from(verdict))
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
