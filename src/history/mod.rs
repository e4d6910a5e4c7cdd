//! Bounded history of generated study sheets.
//!
//! The store keeps the last [`MAX_HISTORY_ENTRIES`] sheets, newest first,
//! with at most one entry per topic. All storage failures degrade to an
//! empty list or a no-op; callers never see an error.

mod storage;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use storage::{FileStorage, KeyStorage, MemoryStorage, default_storage_dir};

/// Storage key holding the JSON-encoded entry array.
pub const HISTORY_KEY: &str = "reviseterm_history";

/// Maximum number of sheets kept in history.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// One saved topic/content/timestamp record.
///
/// The timestamp is serialized as epoch milliseconds under the wire key
/// `ts`, keeping the persisted array compact and stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub topic: String,
    pub content: String,
    #[serde(rename = "ts", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(topic: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// History store over an injected storage capability.
#[derive(Debug)]
pub struct HistoryStore<S: KeyStorage> {
    storage: S,
}

impl<S: KeyStorage> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted list. Absent, unreadable, or malformed storage
    /// all yield an empty list.
    pub fn get_history(&self) -> Vec<HistoryEntry> {
        let Some(raw) = self.storage.get(HISTORY_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding malformed history: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted list verbatim. Write failures are logged
    /// and swallowed.
    pub fn set_history(&mut self, entries: &[HistoryEntry]) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(HISTORY_KEY, &raw) {
            warn!("Failed to persist history: {}", e);
        }
    }

    /// Record a freshly generated sheet.
    ///
    /// Removes any entry with the same topic, prepends the new one, and
    /// truncates to [`MAX_HISTORY_ENTRIES`]. Topic equality is literal and
    /// case-sensitive. Empty topics are ignored.
    pub fn save_to_history(&mut self, topic: &str, content: &str) {
        if topic.is_empty() {
            return;
        }
        let mut entries: Vec<HistoryEntry> = self
            .get_history()
            .into_iter()
            .filter(|e| e.topic != topic)
            .collect();
        entries.insert(0, HistoryEntry::new(topic, content));
        entries.truncate(MAX_HISTORY_ENTRIES);
        self.set_history(&entries);
    }
}
