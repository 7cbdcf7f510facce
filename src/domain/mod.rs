//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the identifiers that flow
//! through a search: recipients, conversations and messages. These value
//! objects are validated at construction time so that malformed collaborator
//! records are caught at the edge of the searcher.

pub mod errors;
pub mod ids;

pub use errors::ValidationError;
pub use ids::{ConversationId, MessageId, RecipientId};
