//! Session-scoped, append-only log of conversions.
use crate::core::conversion::ConversionResult;
use chrono::{DateTime, Local};
use tracing::debug;

/// A conversion recorded in the history along with the time it happened.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub result: ConversionResult,
    pub recorded_at: DateTime<Local>,
}

/// In-memory conversion history. Entries are only ever appended; the whole
/// log can be cleared.
#[derive(Debug, Default)]
pub struct ConversionHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: ConversionResult) {
        self.entries.push(HistoryEntry {
            result,
            recorded_at: Local::now(),
        });
        debug!(len = self.entries.len(), "History entry added");
    }

    pub fn clear(&mut self) {
        debug!(removed = self.entries.len(), "History cleared");
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were recorded.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries with the most recent conversion first.
    pub fn recent_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}
