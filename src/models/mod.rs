//! Data models for the address book and conversation history.
//!
//! Each collaborator hands back raw `*Record` values; the searcher converts
//! them into validated models with `TryFrom`, skipping any that fail.

pub mod contact;
pub mod conversation;
pub mod message;

pub use contact::{Contact, ContactRecord};
pub use conversation::{Conversation, ConversationKind, ConversationRecord, ConversationSummary};
pub use message::{MessageHit, MessageRecord};
