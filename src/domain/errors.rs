//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// A direct conversation must name exactly one other participant.
    DirectParticipantCount { conversation: String, count: usize },

    /// A message hit points at a conversation absent from the snapshot.
    UnknownConversation(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::DirectParticipantCount {
                conversation,
                count,
            } => write!(
                f,
                "Direct conversation {} has {} participants, expected 1",
                conversation, count
            ),
            Self::UnknownConversation(id) => write!(f, "Unknown conversation: {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}
