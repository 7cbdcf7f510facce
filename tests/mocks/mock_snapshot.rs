use conversation_search::domain::RecipientId;
use conversation_search::error::{SearchError, SearchResult};
use conversation_search::models::{ContactRecord, ConversationRecord, MessageHit};
use conversation_search::repositories::{
    ContactDirectory, ConversationStore, MessageIndex, ReadSnapshot, SnapshotSource,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock snapshot serving all three collaborators for testing.
///
/// Records are returned in insertion order. Message hits are configured per
/// exact query string. Any method can be made to fail, and every call is
/// counted for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshot {
    contacts: Arc<Mutex<Vec<ContactRecord>>>,
    conversations: Arc<Mutex<Vec<ConversationRecord>>>,
    message_hits: Arc<Mutex<HashMap<String, Vec<MessageHit>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSnapshot {
    /// Create a new empty MockSnapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact to the directory.
    pub fn add_contact(&self, identifier: &str, display_name: &str) {
        self.add_contact_record(ContactRecord::new(identifier, display_name));
    }

    /// Add a raw contact record, malformed or not.
    pub fn add_contact_record(&self, record: ContactRecord) {
        self.contacts.lock().unwrap().push(record);
    }

    /// Add a conversation to the store.
    pub fn add_conversation(&self, record: ConversationRecord) {
        self.conversations.lock().unwrap().push(record);
    }

    /// Configure the hits returned for an exact query string.
    pub fn add_message_hits(&self, query: &str, hits: Vec<MessageHit>) {
        self.message_hits
            .lock()
            .unwrap()
            .insert(query.to_string(), hits);
    }

    /// Make a method (`contacts`, `conversations`, `search_messages`) fail.
    pub fn fail(&self, method: &str) {
        self.failing.lock().unwrap().insert(method.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Total calls across all methods.
    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn is_failing(&self, method: &str) -> bool {
        self.failing.lock().unwrap().contains(method)
    }
}

impl ContactDirectory for MockSnapshot {
    fn contacts(&self) -> SearchResult<Vec<ContactRecord>> {
        self.track_call("contacts");
        if self.is_failing("contacts") {
            return Err(SearchError::StoreUnavailable(
                "contact directory offline".to_string(),
            ));
        }
        Ok(self.contacts.lock().unwrap().clone())
    }

    fn display_name(&self, recipient: &RecipientId) -> String {
        self.contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.identifier == recipient.as_str())
            .map(|c| c.display_name.clone())
            .unwrap_or_default()
    }
}

impl ConversationStore for MockSnapshot {
    fn conversations(&self) -> SearchResult<Vec<ConversationRecord>> {
        self.track_call("conversations");
        if self.is_failing("conversations") {
            return Err(SearchError::StoreUnavailable(
                "conversation store offline".to_string(),
            ));
        }
        Ok(self.conversations.lock().unwrap().clone())
    }
}

impl MessageIndex for MockSnapshot {
    fn search_messages(&self, query: &str) -> SearchResult<Vec<MessageHit>> {
        self.track_call("search_messages");
        if self.is_failing("search_messages") {
            return Err(SearchError::IndexUnavailable("index offline".to_string()));
        }
        Ok(self
            .message_hits
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

/// Mock snapshot source that counts acquisitions and releases.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSnapshotSource {
    snapshot: MockSnapshot,
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
    unavailable: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockSnapshotSource {
    /// Create a source over an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The data every acquired snapshot reads.
    pub fn snapshot(&self) -> &MockSnapshot {
        &self.snapshot
    }

    /// Make `read_snapshot` fail.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of snapshots handed out.
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Number of snapshots dropped.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn read_snapshot(&self) -> SearchResult<Box<dyn ReadSnapshot + '_>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SearchError::StoreUnavailable("no snapshot".to_string()));
        }
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(TrackedSnapshot {
            inner: self.snapshot.clone(),
            released: Arc::clone(&self.released),
        }))
    }
}

struct TrackedSnapshot {
    inner: MockSnapshot,
    released: Arc<AtomicUsize>,
}

impl Drop for TrackedSnapshot {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl ContactDirectory for TrackedSnapshot {
    fn contacts(&self) -> SearchResult<Vec<ContactRecord>> {
        self.inner.contacts()
    }

    fn display_name(&self, recipient: &RecipientId) -> String {
        self.inner.display_name(recipient)
    }
}

impl ConversationStore for TrackedSnapshot {
    fn conversations(&self) -> SearchResult<Vec<ConversationRecord>> {
        self.inner.conversations()
    }
}

impl MessageIndex for TrackedSnapshot {
    fn search_messages(&self, query: &str) -> SearchResult<Vec<MessageHit>> {
        self.inner.search_messages(query)
    }
}

/// Build a message hit.
#[allow(dead_code)]
pub fn hit(message_id: &str, conversation_id: &str, snippet: &str) -> MessageHit {
    MessageHit {
        message_id: message_id.to_string(),
        conversation_id: conversation_id.to_string(),
        snippet: snippet.to_string(),
    }
}
