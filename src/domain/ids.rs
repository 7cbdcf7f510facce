//! Identifier value objects.
//!
//! Recipients, conversations and messages are all addressed by opaque,
//! non-empty strings. Each gets its own newtype so they cannot be mixed up.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier, validating that it's not empty.
            ///
            /// # Errors
            ///
            /// Returns `ValidationError::EmptyId` if the provided ID is empty
            /// or whitespace only.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                Ok(Self(id))
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Identifier of a recipient (usually an E.164 phone number such as
    /// `+12345678900`).
    ///
    /// # Example
    ///
    /// ```
    /// use conversation_search::domain::RecipientId;
    ///
    /// let id = RecipientId::new("+12345678900").unwrap();
    /// assert_eq!(id.as_str(), "+12345678900");
    /// ```
    RecipientId
}

string_id! {
    /// Identifier of a conversation (thread).
    ConversationId
}

string_id! {
    /// Identifier of a single message.
    MessageId
}
