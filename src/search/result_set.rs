//! Search result value types.

use crate::domain::{MessageId, RecipientId};
use crate::error::{ResultSection, SearchError, SearchResult};
use crate::models::ConversationSummary;
use serde::Serialize;

/// An existing conversation matched by name, title or participant.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConversationSearchResult {
    pub conversation: ConversationSummary,

    /// The matched display name
    pub snippet: Option<String>,
}

/// A contact with no existing direct conversation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactSearchResult {
    pub recipient_id: RecipientId,
    pub display_name: String,

    /// Secondary line for display (the raw identifier)
    pub snippet: String,
}

/// A message whose body matched, tagged with its conversation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageSearchResult {
    pub conversation: ConversationSummary,
    pub message_id: MessageId,

    /// Rendered by the message index; may contain `<b>` emphasis
    pub snippet: String,
}

/// Immutable snapshot of one search: the query plus three ordered lists.
///
/// Conversations never repeat, and no contact appears that already has a
/// direct conversation in `conversations`. A message may belong to a
/// conversation that is also listed; the two are different categories.
///
/// [`SearchResultSet::EMPTY`] is the canonical empty value (no query, no
/// results). A search that ran and matched nothing is also
/// [`is_empty`](Self::is_empty) but keeps its query text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct SearchResultSet {
    query: String,
    conversations: Vec<ConversationSearchResult>,
    contacts: Vec<ContactSearchResult>,
    messages: Vec<MessageSearchResult>,
}

impl SearchResultSet {
    /// The canonical empty result set.
    pub const EMPTY: SearchResultSet = SearchResultSet {
        query: String::new(),
        conversations: Vec::new(),
        contacts: Vec::new(),
        messages: Vec::new(),
    };

    /// Assemble a result set.
    pub fn new(
        query: impl Into<String>,
        conversations: Vec<ConversationSearchResult>,
        contacts: Vec<ContactSearchResult>,
        messages: Vec<MessageSearchResult>,
    ) -> Self {
        Self {
            query: query.into(),
            conversations,
            contacts,
            messages,
        }
    }

    /// The canonical empty result set.
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// The query text this set answers.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn conversations(&self) -> &[ConversationSearchResult] {
        &self.conversations
    }

    pub fn contacts(&self) -> &[ContactSearchResult] {
        &self.contacts
    }

    pub fn messages(&self) -> &[MessageSearchResult] {
        &self.messages
    }

    pub fn conversation_count(&self) -> usize {
        self.conversations.len()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Total results across all three lists.
    pub fn total_count(&self) -> usize {
        self.conversations.len() + self.contacts.len() + self.messages.len()
    }

    /// Whether all three lists are empty.
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Whether this is the canonical empty value rather than a search that
    /// matched nothing.
    pub fn is_canonical_empty(&self) -> bool {
        self.query.is_empty() && self.is_empty()
    }

    /// Conversation result at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::IndexOutOfRange` if `index` is past the end.
    pub fn conversation(&self, index: usize) -> SearchResult<&ConversationSearchResult> {
        checked_get(&self.conversations, ResultSection::Conversations, index)
    }

    /// Contact result at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::IndexOutOfRange` if `index` is past the end.
    pub fn contact(&self, index: usize) -> SearchResult<&ContactSearchResult> {
        checked_get(&self.contacts, ResultSection::Contacts, index)
    }

    /// Message result at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::IndexOutOfRange` if `index` is past the end.
    pub fn message(&self, index: usize) -> SearchResult<&MessageSearchResult> {
        checked_get(&self.messages, ResultSection::Messages, index)
    }
}

fn checked_get<T>(items: &[T], section: ResultSection, index: usize) -> SearchResult<&T> {
    items.get(index).ok_or(SearchError::IndexOutOfRange {
        section,
        index,
        len: items.len(),
    })
}
