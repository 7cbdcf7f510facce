//! Contact model representing an address book entry.

use crate::domain::{RecipientId, ValidationError};
use crate::matching::Indexable;
use serde::{Deserialize, Serialize};

/// A contact as enumerated by the contact directory, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactRecord {
    /// Raw recipient identifier (phone-number-like string)
    pub identifier: String,

    /// Display name as resolved by the directory
    pub display_name: String,
}

impl ContactRecord {
    /// Create a new contact record.
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}

/// A validated contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Recipient identifier
    pub recipient_id: RecipientId,

    /// Display name (may be empty when the directory has none)
    pub display_name: String,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            recipient_id: RecipientId::new(record.identifier)?,
            display_name: record.display_name,
        })
    }
}

impl Indexable for Contact {
    fn index_text(&self) -> String {
        format!("{} {}", self.display_name, self.recipient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_from_record() {
        let contact = Contact::try_from(ContactRecord::new("+12345678900", "Alice")).unwrap();
        assert_eq!(contact.recipient_id.as_str(), "+12345678900");
        assert_eq!(contact.display_name, "Alice");
    }

    #[test]
    fn test_contact_from_record_rejects_empty_identifier() {
        let result = Contact::try_from(ContactRecord::new("", "Nobody"));
        assert_eq!(result, Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_contact_index_text() {
        let contact = Contact::try_from(ContactRecord::new("+49030183000", "Bob Barker")).unwrap();
        assert_eq!(contact.index_text(), "Bob Barker +49030183000");
    }

    #[test]
    fn test_contact_record_deserialization_defaults() {
        let record: ContactRecord = serde_json::from_str(r#"{"identifier":"+1555"}"#).unwrap();
        assert_eq!(record.display_name, "");
    }
}
