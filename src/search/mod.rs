//! Search over conversations, contacts and message bodies.
//!
//! [`ConversationSearcher`] merges name matching over conversations and
//! contacts with full-text message search into one [`SearchResultSet`].
//! [`FullTextMessageIndex`] is the in-memory message index used by the
//! reference store.

pub mod conversation_searcher;
pub mod message_index;
pub mod result_set;

pub use conversation_searcher::ConversationSearcher;
pub use message_index::{FullTextMessageIndex, IndexOptions};
pub use result_set::{
    ContactSearchResult, ConversationSearchResult, MessageSearchResult, SearchResultSet,
};
