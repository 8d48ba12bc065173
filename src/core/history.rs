//! Bounded calculation history.
//!
//! Keeps the most recent expression/result pairs, newest first. Only
//! successful calculations are recorded.

use serde::{Deserialize, Serialize};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// A finalized calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression as it appeared in the display buffer
    pub expression: String,
    /// The formatted result
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

/// Newest-first log of calculations, bounded to `capacity` entries.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::{HistoryEntry, HistoryLog};
///
/// let mut log = HistoryLog::with_capacity(2);
/// log.push(HistoryEntry::new("1+1", "2"));
/// log.push(HistoryEntry::new("2+2", "4"));
/// log.push(HistoryEntry::new("3+3", "6"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.select(0), Some("6"));
/// assert_eq!(log.select(1), Some("4"));
/// assert_eq!(log.select(2), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    /// Create an empty log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the front, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Result stored at `index` (0 is the most recent).
    pub fn select(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.result.as_str())
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
