//! Conversation (thread) model.

use crate::domain::{ConversationId, RecipientId, ValidationError};
use crate::repositories::ContactDirectory;
use serde::{Deserialize, Serialize};

/// Whether a conversation is one-to-one or a named group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    /// Two participants: the local user and one recipient
    #[default]
    Direct,
    /// Named conversation with any number of members
    Group,
}

/// A conversation as enumerated by the conversation store, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ConversationRecord {
    /// Raw conversation identifier
    pub id: String,

    /// Direct or group
    pub kind: ConversationKind,

    /// Group title (ignored for direct conversations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Raw recipient identifiers of the other participants
    pub participant_ids: Vec<String>,
}

impl ConversationRecord {
    /// Create a record for a direct conversation with a single recipient.
    pub fn direct(id: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: ConversationKind::Direct,
            title: None,
            participant_ids: vec![recipient.into()],
        }
    }

    /// Create a record for a group conversation.
    pub fn group<I, S>(id: impl Into<String>, title: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            kind: ConversationKind::Group,
            title: Some(title.into()),
            participant_ids: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// A validated conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub kind: ConversationKind,
    pub title: Option<String>,
    pub participants: Vec<RecipientId>,
}

impl Conversation {
    /// The recipient of a direct conversation, `None` for groups.
    pub fn direct_recipient(&self) -> Option<&RecipientId> {
        match self.kind {
            ConversationKind::Direct => self.participants.first(),
            ConversationKind::Group => None,
        }
    }

    /// Name shown for this conversation.
    ///
    /// Groups use their title, or their members' names joined with `", "`
    /// when untitled. Direct conversations resolve the recipient through the
    /// directory. Unnamed recipients fall back to the raw identifier.
    pub fn display_name<D: ContactDirectory + ?Sized>(&self, directory: &D) -> String {
        match self.direct_recipient() {
            Some(recipient) => member_name(recipient, directory),
            None => match self.title.as_deref().map(str::trim) {
                Some(title) if !title.is_empty() => title.to_string(),
                _ => self
                    .participants
                    .iter()
                    .map(|recipient| member_name(recipient, directory))
                    .collect::<Vec<_>>()
                    .join(", "),
            },
        }
    }

    /// Text searched by the term matcher for this conversation.
    ///
    /// Every participant contributes both their identifier and their
    /// resolved name, so a group is found by any member.
    pub fn index_text<D: ContactDirectory + ?Sized>(&self, directory: &D) -> String {
        let members = self
            .participants
            .iter()
            .map(|recipient| format!("{} {}", recipient, directory.display_name(recipient)))
            .collect::<Vec<_>>()
            .join(" ");

        match self.kind {
            ConversationKind::Group => {
                format!("{} {}", self.title.as_deref().unwrap_or(""), members)
            }
            ConversationKind::Direct => members,
        }
    }

    /// Snapshot of the fields a presentation layer needs.
    pub fn summary<D: ContactDirectory + ?Sized>(&self, directory: &D) -> ConversationSummary {
        ConversationSummary {
            id: self.id.clone(),
            kind: self.kind,
            name: self.display_name(directory),
        }
    }
}

fn member_name<D: ContactDirectory + ?Sized>(recipient: &RecipientId, directory: &D) -> String {
    let name = directory.display_name(recipient);
    if name.trim().is_empty() {
        recipient.to_string()
    } else {
        name
    }
}

impl TryFrom<ConversationRecord> for Conversation {
    type Error = ValidationError;

    fn try_from(record: ConversationRecord) -> Result<Self, Self::Error> {
        let id = ConversationId::new(record.id)?;

        if record.kind == ConversationKind::Direct && record.participant_ids.len() != 1 {
            return Err(ValidationError::DirectParticipantCount {
                conversation: id.into_inner(),
                count: record.participant_ids.len(),
            });
        }

        let participants = record
            .participant_ids
            .into_iter()
            .map(RecipientId::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            kind: record.kind,
            title: record.title,
            participants,
        })
    }
}

/// Display view of a conversation attached to search results.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub kind: ConversationKind,
    pub name: String,
}
