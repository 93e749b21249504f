//! Immutable action records from a card's history.
//!
//! Every payload sub-field is optional. The classifier distinguishes a field
//! that was never sent from one that was sent as `false`, so nothing here
//! collapses absence into a default value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event_type::EventType;
use crate::types::{BoardId, CardId, EventId, ListId, MemberId};

/// One historical action on a card, list, or board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    #[serde(rename = "type")]
    pub kind: EventType,

    /// When the action happened. The only ordering key.
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,

    /// Member who performed the action.
    #[serde(
        rename = "idMemberCreator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub actor_id: Option<MemberId>,

    /// Member the action was about (added to or removed from the card).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<MemberRef>,

    #[serde(rename = "data", default)]
    pub payload: Payload,
}

/// Type-dependent action data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_before: Option<ListRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_after: Option<ListRef>,

    /// Card state after the action (`data.card` on the wire).
    #[serde(rename = "card", default, skip_serializing_if = "Option::is_none")]
    pub card_after: Option<CardSnapshot>,

    /// Fields that changed, with their previous values (`data.old`).
    #[serde(rename = "old", default, skip_serializing_if = "Option::is_none")]
    pub card_before: Option<CardSnapshot>,

    /// Card this one was copied from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_source: Option<CardSnapshot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Snapshot of a list as it looked when the action happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRef {
    pub id: ListId,
    #[serde(default)]
    pub name: String,
}

impl ListRef {
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Snapshot of a board as it looked when the action happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRef {
    pub id: BoardId,
    #[serde(default)]
    pub name: String,
}

/// Partial card state carried inside an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CardId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

/// Member referenced by a membership action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub id: MemberId,
    #[serde(default)]
    pub full_name: String,
}

impl Event {
    /// Creates an event with an empty payload.
    pub fn new(id: EventId, kind: EventType, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            kind,
            timestamp,
            actor_id: None,
            member: None,
            payload: Payload::default(),
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    #[must_use]
    pub fn with_actor(mut self, actor_id: MemberId) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: MemberRef) -> Self {
        self.member = Some(member);
        self
    }

    pub fn list(&self) -> Option<&ListRef> {
        self.payload.list.as_ref()
    }

    pub fn list_before(&self) -> Option<&ListRef> {
        self.payload.list_before.as_ref()
    }

    pub fn list_after(&self) -> Option<&ListRef> {
        self.payload.list_after.as_ref()
    }

    /// `closed` flag after the action; `None` when it was not reported.
    pub fn closed_after(&self) -> Option<bool> {
        self.payload.card_after.as_ref().and_then(|card| card.closed)
    }

    /// `closed` flag before the action; `None` when it did not change.
    pub fn closed_before(&self) -> Option<bool> {
        self.payload.card_before.as_ref().and_then(|card| card.closed)
    }

    /// ID of the card this action concerns.
    pub fn card_id(&self) -> Option<&CardId> {
        self.payload.card_after.as_ref().and_then(|card| card.id.as_ref())
    }

    /// ID of the card a copy was made from.
    pub fn card_source_id(&self) -> Option<&CardId> {
        self.payload
            .card_source
            .as_ref()
            .and_then(|card| card.id.as_ref())
    }

    pub fn board_id(&self) -> Option<&BoardId> {
        self.payload.board.as_ref().map(|board| &board.id)
    }

    /// Whether any list reference in the payload points at `list_id`.
    pub fn touches_list(&self, list_id: &ListId) -> bool {
        [self.list(), self.list_before(), self.list_after()]
            .into_iter()
            .flatten()
            .any(|list| &list.id == list_id)
    }
}
