//! In-memory implementation of all three collaborators.
//!
//! The store keeps its data behind `RwLock<Arc<..>>`. A snapshot is a clone
//! of the `Arc`, so it never blocks writers and keeps seeing the data it was
//! taken from even after [`InMemoryStore::replace`].

use super::traits::{ContactDirectory, ConversationStore, MessageIndex, ReadSnapshot, SnapshotSource};
use crate::domain::RecipientId;
use crate::error::{LoadResult, SearchError, SearchResult};
use crate::models::{ContactRecord, ConversationRecord, MessageHit, MessageRecord};
use crate::search::{FullTextMessageIndex, IndexOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Everything the store serves, as read from a JSON snapshot file.
///
/// Records are kept as loaded. Malformed contacts and conversations are
/// skipped at search time; messages without an id or conversation are left
/// out of the full-text index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Dataset {
    /// Address book, in the order it should be enumerated
    pub contacts: Vec<ContactRecord>,

    /// Conversations, most recently active first
    pub conversations: Vec<ConversationRecord>,

    /// Message history fed to the full-text index
    pub messages: Vec<MessageRecord>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be read and
    /// `LoadError::Json` if it is not a valid dataset.
    pub fn load_from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// See [`Dataset::load_from_path`].
    pub fn from_json(text: &str) -> LoadResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Messages the full-text index can serve: both ids present.
fn indexable_messages(messages: &[MessageRecord]) -> Vec<MessageRecord> {
    messages
        .iter()
        .enumerate()
        .filter(|(position, message)| {
            let usable =
                !message.id.trim().is_empty() && !message.conversation_id.trim().is_empty();
            if !usable {
                tracing::warn!(
                    position = *position,
                    message_id = %message.id,
                    conversation_id = %message.conversation_id,
                    "Skipping message without id or conversation"
                );
            }
            usable
        })
        .map(|(_, message)| message.clone())
        .collect()
}

#[derive(Debug)]
struct StoreData {
    dataset: Dataset,

    /// Identifier to display name, first contact wins
    names: HashMap<String, String>,

    index: FullTextMessageIndex,
}

impl StoreData {
    fn build(dataset: Dataset, options: IndexOptions) -> Self {
        let mut names = HashMap::with_capacity(dataset.contacts.len());
        for contact in &dataset.contacts {
            names
                .entry(contact.identifier.clone())
                .or_insert_with(|| contact.display_name.clone());
        }

        let index = FullTextMessageIndex::build(&indexable_messages(&dataset.messages), options);

        Self {
            dataset,
            names,
            index,
        }
    }
}

/// Thread-safe in-memory data store.
#[derive(Debug)]
pub struct InMemoryStore {
    data: RwLock<Arc<StoreData>>,
    options: IndexOptions,
}

impl InMemoryStore {
    /// Create a store serving `dataset`, indexing messages with `options`.
    pub fn new(dataset: Dataset, options: IndexOptions) -> Self {
        Self {
            data: RwLock::new(Arc::new(StoreData::build(dataset, options))),
            options,
        }
    }

    /// Swap in a new dataset.
    ///
    /// Snapshots taken before the swap keep reading the old data.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::StoreUnavailable` if the lock is poisoned.
    pub fn replace(&self, dataset: Dataset) -> SearchResult<()> {
        let fresh = Arc::new(StoreData::build(dataset, self.options));
        let mut data = self
            .data
            .write()
            .map_err(|_| SearchError::StoreUnavailable("store lock poisoned".to_string()))?;
        *data = fresh;
        tracing::info!(
            contacts = data.dataset.contacts.len(),
            conversations = data.dataset.conversations.len(),
            messages = data.index.message_count(),
            "Dataset replaced"
        );
        Ok(())
    }

    /// Take a snapshot of the current data.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::StoreUnavailable` if the lock is poisoned.
    pub fn snapshot(&self) -> SearchResult<MemorySnapshot> {
        let data = self
            .data
            .read()
            .map_err(|_| SearchError::StoreUnavailable("store lock poisoned".to_string()))?;
        Ok(MemorySnapshot {
            data: Arc::clone(&*data),
        })
    }

    /// Options the message index is built with.
    pub fn options(&self) -> IndexOptions {
        self.options
    }
}

impl SnapshotSource for InMemoryStore {
    fn read_snapshot(&self) -> SearchResult<Box<dyn ReadSnapshot + '_>> {
        Ok(Box::new(self.snapshot()?))
    }
}

/// Immutable view of the store at one point in time.
#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    data: Arc<StoreData>,
}

impl MemorySnapshot {
    /// Number of indexed messages visible in this snapshot.
    pub fn message_count(&self) -> usize {
        self.data.index.message_count()
    }
}

impl ContactDirectory for MemorySnapshot {
    fn contacts(&self) -> SearchResult<Vec<ContactRecord>> {
        Ok(self.data.dataset.contacts.clone())
    }

    fn display_name(&self, recipient: &RecipientId) -> String {
        self.data
            .names
            .get(recipient.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

impl ConversationStore for MemorySnapshot {
    fn conversations(&self) -> SearchResult<Vec<ConversationRecord>> {
        Ok(self.data.dataset.conversations.clone())
    }
}

impl MessageIndex for MemorySnapshot {
    fn search_messages(&self, query: &str) -> SearchResult<Vec<MessageHit>> {
        Ok(self.data.index.search(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use chrono::{TimeZone, Utc};

    fn dataset(name: &str) -> Dataset {
        Dataset {
            contacts: vec![ContactRecord::new("+12345678900", name)],
            conversations: vec![ConversationRecord::direct("t1", "+12345678900")],
            messages: vec![MessageRecord::new(
                "m1",
                "t1",
                format!("Hello {}", name),
                Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            )],
        }
    }

    fn alice() -> RecipientId {
        RecipientId::new("+12345678900").unwrap()
    }

    #[test]
    fn test_display_name_lookup() {
        let store = InMemoryStore::new(dataset("Alice"), IndexOptions::default());
        let snapshot = store.snapshot().unwrap();

        assert_eq!(snapshot.display_name(&alice()), "Alice");
        assert_eq!(
            snapshot.display_name(&RecipientId::new("+10000000000").unwrap()),
            ""
        );
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = InMemoryStore::new(dataset("Alice"), IndexOptions::default());
        let before = store.snapshot().unwrap();

        store.replace(dataset("Alicia")).unwrap();
        let after = store.snapshot().unwrap();

        assert_eq!(before.display_name(&alice()), "Alice");
        assert_eq!(before.search_messages("Alice").unwrap().len(), 1);
        assert_eq!(after.display_name(&alice()), "Alicia");
        assert_eq!(after.search_messages("Alicia").unwrap().len(), 1);
    }

    #[test]
    fn test_read_snapshot_serves_all_collaborators() {
        let store = InMemoryStore::new(dataset("Alice"), IndexOptions::default());
        let snapshot = store.read_snapshot().unwrap();

        assert_eq!(snapshot.contacts().unwrap().len(), 1);
        assert_eq!(snapshot.conversations().unwrap()[0].id, "t1");
        let hits = snapshot.search_messages("hello").unwrap();
        assert_eq!(hits[0].snippet, "<b>Hello</b> Alice");
    }

    #[test]
    fn test_first_contact_name_wins() {
        let mut data = dataset("Alice");
        data.contacts.push(ContactRecord::new("+12345678900", "Other"));
        let store = InMemoryStore::new(data, IndexOptions::default());

        assert_eq!(store.snapshot().unwrap().display_name(&alice()), "Alice");
    }

    #[test]
    fn test_dataset_from_json() {
        let json = r#"{
            "contacts": [{"identifier": "+12345678900", "display_name": "Alice"}],
            "conversations": [
                {"id": "g1", "kind": "group", "title": "Book Club", "participant_ids": ["+12345678900"]}
            ],
            "messages": [
                {"id": "m1", "conversation_id": "g1", "body": "Hi", "sent_at": "2024-03-01T10:00:00Z"}
            ]
        }"#;

        let data = Dataset::from_json(json).unwrap();
        assert_eq!(data.contacts.len(), 1);
        assert_eq!(data.conversations[0].title.as_deref(), Some("Book Club"));
        assert_eq!(data.messages[0].body, "Hi");
    }

    #[test]
    fn test_dataset_missing_sections_default_to_empty() {
        let data = Dataset::from_json("{}").unwrap();
        assert_eq!(data, Dataset::default());
    }

    #[test]
    fn test_messages_without_ids_are_left_out_of_index() {
        let json = r#"{
            "messages": [
                {"id": "", "conversation_id": "t1", "body": "hello there", "sent_at": "2024-03-01T10:00:00Z"},
                {"id": "m2", "conversation_id": "t1", "body": "hello", "sent_at": "2024-03-01T10:01:00Z"},
                {"id": "m3", "conversation_id": " ", "body": "hello again", "sent_at": "2024-03-01T10:02:00Z"}
            ]
        }"#;

        let data = Dataset::from_json(json).unwrap();
        assert_eq!(data.messages.len(), 3);

        let store = InMemoryStore::new(data, IndexOptions::default());
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.message_count(), 1);

        let hits = snapshot.search_messages("hello").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].message_id, "m2");
    }

    #[test]
    fn test_dataset_invalid_json() {
        assert!(matches!(
            Dataset::from_json("not json"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Dataset::load_from_path("/nonexistent/conversation-search/data.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
