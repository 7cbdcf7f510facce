//! Message models: stored message bodies and full-text index hits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored message, as fed to the full-text message index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRecord {
    /// Unique identifier for the message
    pub id: String,

    /// Conversation the message belongs to
    pub conversation_id: String,

    /// Plain-text message body
    #[serde(default)]
    pub body: String,

    /// When the message was sent (RFC 3339 in JSON)
    pub sent_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Create a new message record.
    pub fn new(
        id: impl Into<String>,
        conversation_id: impl Into<String>,
        body: impl Into<String>,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            conversation_id: conversation_id.into(),
            body: body.into(),
            sent_at,
        }
    }
}

/// A raw match returned by the full-text message index.
///
/// The snippet may carry `<b>` emphasis around matched terms; it is opaque to
/// the searcher and passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MessageHit {
    pub message_id: String,
    pub conversation_id: String,
    pub snippet: String,
}
