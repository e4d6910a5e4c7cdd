//! Tests for the history store and its storage backends.

use super::*;

/// Storage whose writes always fail, for the quota/unavailable path.
struct FailingStorage {
    inner: MemoryStorage,
}

impl KeyStorage for FailingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage quota exceeded")
    }
}

fn memory_store() -> HistoryStore<MemoryStorage> {
    HistoryStore::new(MemoryStorage::new())
}

#[test]
fn get_history_on_empty_storage_is_empty() {
    let store = memory_store();
    assert!(store.get_history().is_empty());
}

#[test]
fn set_then_get_roundtrip() {
    let mut store = memory_store();
    let entries = vec![HistoryEntry::new("t1", "c1")];
    store.set_history(&entries);
    assert_eq!(store.get_history(), entries);
}

#[test]
fn malformed_storage_yields_empty_history() {
    let mut storage = MemoryStorage::new();
    storage.set(HISTORY_KEY, "{not json").unwrap();
    let store = HistoryStore::new(storage);
    assert!(store.get_history().is_empty());
}

#[test]
fn wrong_shape_storage_yields_empty_history() {
    let mut storage = MemoryStorage::new();
    storage.set(HISTORY_KEY, r#"{"topic":"not an array"}"#).unwrap();
    let store = HistoryStore::new(storage);
    assert!(store.get_history().is_empty());
}

#[test]
fn save_adds_at_front_and_trims_to_ten() {
    let mut store = memory_store();
    for i in 0..12 {
        store.save_to_history(&format!("t{i}"), &format!("c{i}"));
    }
    let h = store.get_history();
    assert_eq!(h.len(), MAX_HISTORY_ENTRIES);
    assert_eq!(h[0].topic, "t11");
    assert_eq!(h[h.len() - 1].topic, "t2");
}

#[test]
fn length_never_exceeds_bound() {
    let mut store = memory_store();
    for i in 0..40 {
        // Alternate fresh and repeated topics
        store.save_to_history(&format!("t{}", i % 15), "c");
        assert!(store.get_history().len() <= MAX_HISTORY_ENTRIES);
    }
}

#[test]
fn save_replaces_duplicate_topic() {
    let mut store = memory_store();
    store.save_to_history("dup", "first");
    store.save_to_history("other", "x");
    store.save_to_history("dup", "second");
    let h = store.get_history();
    assert_eq!(h.len(), 2);
    assert_eq!(h[0].topic, "dup");
    assert_eq!(h[0].content, "second");
    assert_eq!(h[1].topic, "other");
}

#[test]
fn topic_equality_is_case_sensitive() {
    let mut store = memory_store();
    store.save_to_history("Rome", "a");
    store.save_to_history("rome", "b");
    assert_eq!(store.get_history().len(), 2);
}

#[test]
fn empty_topic_is_ignored() {
    let mut store = memory_store();
    store.save_to_history("", "content");
    assert!(store.get_history().is_empty());
}

#[test]
fn failing_write_degrades_to_noop() {
    let mut inner = MemoryStorage::new();
    let seeded = vec![HistoryEntry::new("kept", "c")];
    inner
        .set(HISTORY_KEY, &serde_json::to_string(&seeded).unwrap())
        .unwrap();

    let mut store = HistoryStore::new(FailingStorage { inner });
    store.save_to_history("new", "content");

    // The write failed silently; the previously persisted entry survives.
    let h = store.get_history();
    assert_eq!(h.len(), 1);
    assert_eq!(h[0].topic, "kept");
}

#[test]
fn file_storage_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = HistoryStore::new(FileStorage::new(dir.path()));
    assert!(store.get_history().is_empty());

    store.save_to_history("géométrie", "les angles");
    let h = store.get_history();
    assert_eq!(h.len(), 1);
    assert_eq!(h[0].topic, "géométrie");

    // A fresh store over the same directory sees the persisted data,
    // and no temp file is left behind by the atomic write.
    let reopened = HistoryStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.get_history(), h);
    assert!(!dir.path().join(format!("{HISTORY_KEY}.json.tmp")).exists());
}

#[test]
fn wire_format_uses_millisecond_ts() {
    let mut storage = MemoryStorage::new();
    storage
        .set(
            HISTORY_KEY,
            r#"[{"topic":"t","content":"c","ts":1700000000000}]"#,
        )
        .unwrap();
    let store = HistoryStore::new(storage);
    let h = store.get_history();
    assert_eq!(h[0].created_at.timestamp_millis(), 1_700_000_000_000);
}
