use crate::domain::RecipientId;
use crate::error::SearchResult;
use crate::models::{ContactRecord, ConversationRecord, MessageHit};

/// Source of known contacts.
///
/// Must be deterministic for a given snapshot.
pub trait ContactDirectory {
    /// Enumerate all known contacts, typically in alphabetical order.
    fn contacts(&self) -> SearchResult<Vec<ContactRecord>>;

    /// Resolve a display name, or an empty string if the recipient is unknown.
    fn display_name(&self, recipient: &RecipientId) -> String;
}

/// Source of existing conversations (threads).
pub trait ConversationStore {
    /// Enumerate all conversations, typically most recently active first.
    fn conversations(&self) -> SearchResult<Vec<ConversationRecord>>;
}

/// Full-text index over message bodies.
pub trait MessageIndex {
    /// Find messages matching the raw query, in the index's own order.
    fn search_messages(&self, query: &str) -> SearchResult<Vec<MessageHit>>;
}

/// One consistent, read-only view over all three collaborators.
///
/// Everything read through a single snapshot reflects the same point in time.
pub trait ReadSnapshot: ContactDirectory + ConversationStore + MessageIndex {}

impl<T> ReadSnapshot for T where T: ContactDirectory + ConversationStore + MessageIndex {}

/// Hands out read snapshots.
///
/// The snapshot is released when the returned box is dropped, so it is
/// scoped to whatever holds it and freed on every exit path.
pub trait SnapshotSource: Send + Sync {
    /// Acquire a read snapshot.
    fn read_snapshot(&self) -> SearchResult<Box<dyn ReadSnapshot + '_>>;
}
