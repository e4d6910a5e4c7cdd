//! Projection of the history store onto display targets.
//!
//! The renderer never touches a concrete UI: it fills an injected
//! [`ListTarget`] with items, and activating an item writes into optional
//! [`TextSink`] targets. The ratatui panels implement these traits on one
//! side; tests substitute plain fakes on the other.

use crate::history::{HistoryStore, KeyStorage};

/// Placeholder shown when the history is empty.
pub const EMPTY_HISTORY_LABEL: &str = "Aucun historique pour l’instant.";

/// A list display target. `replace_items` fully replaces prior contents,
/// so re-rendering is idempotent.
pub trait ListTarget {
    fn replace_items(&mut self, items: Vec<HistoryItem>);
}

/// A single-value text display target (output area, status line).
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

/// One rendered list item: either a saved sheet or the empty placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    label: String,
    content: Option<String>,
}

impl HistoryItem {
    fn placeholder() -> Self {
        Self {
            label: EMPTY_HISTORY_LABEL.to_string(),
            content: None,
        }
    }

    fn entry(topic: String, content: String) -> Self {
        Self {
            label: topic,
            content: Some(content),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Placeholder items are not interactive.
    pub fn is_interactive(&self) -> bool {
        self.content.is_some()
    }

    /// Activation handler: reload the sheet into the output target and
    /// confirm in the status target. A placeholder does nothing.
    pub fn activate(
        &self,
        output: Option<&mut dyn TextSink>,
        status: Option<&mut dyn TextSink>,
    ) {
        let Some(content) = &self.content else {
            return;
        };
        if let Some(output) = output {
            output.set_text(content);
        }
        if let Some(status) = status {
            status.set_text(&format!("Rechargé : {}", self.label));
        }
    }
}

/// Render the current history into `list`, newest first. No-op when the
/// list target is absent.
pub fn render_history<S: KeyStorage>(
    store: &HistoryStore<S>,
    list: Option<&mut dyn ListTarget>,
) {
    let Some(list) = list else {
        return;
    };
    let entries = store.get_history();
    let items = if entries.is_empty() {
        vec![HistoryItem::placeholder()]
    } else {
        entries
            .into_iter()
            .map(|e| HistoryItem::entry(e.topic, e.content))
            .collect()
    };
    list.replace_items(items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{HistoryEntry, HistoryStore, MemoryStorage};

    #[derive(Default)]
    struct FakeList {
        items: Vec<HistoryItem>,
        replace_calls: usize,
    }

    impl ListTarget for FakeList {
        fn replace_items(&mut self, items: Vec<HistoryItem>) {
            self.items = items;
            self.replace_calls += 1;
        }
    }

    #[derive(Default)]
    struct FakeSink {
        text: String,
    }

    impl TextSink for FakeSink {
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
    }

    fn seeded_store() -> HistoryStore<MemoryStorage> {
        let mut store = HistoryStore::new(MemoryStorage::new());
        store.set_history(&[
            HistoryEntry::new("A", "Content A"),
            HistoryEntry::new("B", "Content B"),
        ]);
        store
    }

    #[test]
    fn renders_entries_in_stored_order() {
        let store = seeded_store();
        let mut list = FakeList::default();
        render_history(&store, Some(&mut list));

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].label(), "A");
        assert_eq!(list.items[1].label(), "B");
        assert!(list.items.iter().all(HistoryItem::is_interactive));
    }

    #[test]
    fn activation_reloads_content_and_confirms() {
        let store = seeded_store();
        let mut list = FakeList::default();
        render_history(&store, Some(&mut list));

        let mut output = FakeSink::default();
        let mut status = FakeSink::default();
        list.items[0].activate(Some(&mut output), Some(&mut status));

        assert_eq!(output.text, "Content A");
        assert!(status.text.contains("Rechargé"));
        assert!(status.text.contains('A'));
    }

    #[test]
    fn activation_tolerates_absent_targets() {
        let store = seeded_store();
        let mut list = FakeList::default();
        render_history(&store, Some(&mut list));
        list.items[0].activate(None, None);
    }

    #[test]
    fn empty_history_renders_single_placeholder() {
        let store = HistoryStore::new(MemoryStorage::new());
        let mut list = FakeList::default();
        render_history(&store, Some(&mut list));

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].label(), EMPTY_HISTORY_LABEL);
        assert!(!list.items[0].is_interactive());

        // Activating the placeholder changes nothing.
        let mut output = FakeSink::default();
        list.items[0].activate(Some(&mut output), None);
        assert!(output.text.is_empty());
    }

    #[test]
    fn rerender_replaces_prior_items() {
        let mut store = seeded_store();
        let mut list = FakeList::default();
        render_history(&store, Some(&mut list));
        store.save_to_history("C", "Content C");
        render_history(&store, Some(&mut list));

        assert_eq!(list.replace_calls, 2);
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[0].label(), "C");
    }

    #[test]
    fn absent_list_target_is_a_noop() {
        let store = seeded_store();
        render_history(&store, None);
    }
}
