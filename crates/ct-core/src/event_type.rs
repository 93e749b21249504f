//! Event type enum as the single source of truth for action type strings.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Action types the timeline logic knows about.
///
/// The wire vocabulary is open, so anything outside the known set parses to
/// [`EventType::Unrecognized`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    CardCreated,
    CardCopied,
    CardEmailedIn,
    CardConvertedFromCheckItem,
    CardUpdated,
    CardMovedToBoard,
    CardMovedFromBoard,
    CardDeleted,
    CommentAdded,
    MemberAddedToCard,
    MemberRemovedFromCard,
    ListCreated,
    ListUpdated,
    Unrecognized(String),
}

impl EventType {
    /// Wire name used by the service.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CardCreated => "createCard",
            Self::CardCopied => "copyCard",
            Self::CardEmailedIn => "emailCard",
            Self::CardConvertedFromCheckItem => "convertToCardFromCheckItem",
            Self::CardUpdated => "updateCard",
            Self::CardMovedToBoard => "moveCardToBoard",
            Self::CardMovedFromBoard => "moveCardFromBoard",
            Self::CardDeleted => "deleteCard",
            Self::CommentAdded => "commentCard",
            Self::MemberAddedToCard => "addMemberToCard",
            Self::MemberRemovedFromCard => "removeMemberFromCard",
            Self::ListCreated => "createList",
            Self::ListUpdated => "updateList",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "createCard" => Self::CardCreated,
            "copyCard" => Self::CardCopied,
            "emailCard" => Self::CardEmailedIn,
            "convertToCardFromCheckItem" => Self::CardConvertedFromCheckItem,
            "updateCard" => Self::CardUpdated,
            "moveCardToBoard" => Self::CardMovedToBoard,
            "moveCardFromBoard" => Self::CardMovedFromBoard,
            "deleteCard" => Self::CardDeleted,
            "commentCard" => Self::CommentAdded,
            "addMemberToCard" => Self::MemberAddedToCard,
            "removeMemberFromCard" => Self::MemberRemovedFromCard,
            "createList" => Self::ListCreated,
            "updateList" => Self::ListUpdated,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl FromStr for EventType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}
