//! Identifier newtypes with validation.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// Identifier of a single action in a card's history.
    EventId, "event ID"
);

define_string_id!(
    /// Identifier of a card.
    CardId, "card ID"
);

define_string_id!(
    /// Identifier of a list on a board.
    ListId, "list ID"
);

define_string_id!(
    /// Identifier of a board.
    BoardId, "board ID"
);

define_string_id!(
    /// Identifier of a member (user account).
    MemberId, "member ID"
);

impl EventId {
    /// When the event record was created, decoded from the ID prefix.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        id_to_time(&self.0)
    }
}

impl CardId {
    /// When the card was created, decoded from the ID prefix.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        id_to_time(&self.0)
    }
}

/// Decodes the creation time embedded in a service object ID.
///
/// The first 8 characters are a hex-encoded Unix timestamp in seconds.
/// Returns `None` for IDs that are too short or not hex.
pub fn id_to_time(id: &str) -> Option<DateTime<Utc>> {
    let prefix = id.get(..8)?;
    let seconds = i64::from_str_radix(prefix, 16).ok()?;
    Utc.timestamp_opt(seconds, 0).single()
}
