//! Card snapshots and the card-level queries built on the fetch source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::{Classifier, EventFilter, first_creation};
use crate::event::Event;
use crate::membership::{MemberDuration, member_durations_at};
use crate::source::{EventSource, FetchError, Scope};
use crate::timeline::{ListDuration, list_durations_at};
use crate::types::{BoardId, CardId, ListId, MemberId};

/// Current state of a card.
///
/// `events` holds whatever history the caller already loaded; queries use it
/// before falling back to the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "idBoard", default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<BoardId>,
    #[serde(rename = "idList", default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<ListId>,
    #[serde(default)]
    pub closed: bool,
    #[serde(rename = "actions", default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
}

impl Card {
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            board_id: None,
            list_id: None,
            closed: false,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    fn scope(&self) -> Scope {
        Scope::Card(self.id.clone())
    }

    /// Pre-loaded events matching `filter`, or a fresh fetch when none are
    /// loaded.
    fn events_for<S: EventSource>(
        &self,
        source: &S,
        filter: EventFilter,
        classifier: &Classifier,
    ) -> Result<Vec<Event>, FetchError> {
        if self.events.is_empty() {
            tracing::debug!(card_id = %self.id, ?filter, "no events loaded, fetching");
            let fetched = source.fetch_events(&self.scope(), filter)?;
            return Ok(fetched
                .into_iter()
                .filter(|event| filter.matches(event, classifier))
                .collect());
        }
        Ok(filter.apply(&self.events, classifier).cloned().collect())
    }
}

/// List residency for a card, with any open interval closed at `now`.
pub fn card_list_durations<S: EventSource>(
    card: &Card,
    source: &S,
    classifier: &Classifier,
    now: DateTime<Utc>,
) -> Result<Vec<ListDuration>, FetchError> {
    let events = card.events_for(source, EventFilter::ListChanges, classifier)?;
    Ok(list_durations_at(&events, classifier, now))
}

/// Member assignment durations for a card, with open assignments closed at
/// `now`.
pub fn card_member_durations<S: EventSource>(
    card: &Card,
    source: &S,
    classifier: &Classifier,
    now: DateTime<Utc>,
) -> Result<Vec<MemberDuration>, FetchError> {
    let events = card.events_for(source, EventFilter::MembershipChanges, classifier)?;
    Ok(member_durations_at(&events, classifier, now))
}

/// Member who created the card: the actor of its first creation action.
///
/// Returns `Ok(None)` when no creation action carries an actor.
pub fn creator_member_id<S: EventSource>(
    card: &Card,
    source: &S,
    classifier: &Classifier,
) -> Result<Option<MemberId>, FetchError> {
    let events = card.events_for(source, EventFilter::All, classifier)?;
    Ok(first_creation(&events, classifier).and_then(|event| event.actor_id.clone()))
}

/// Whether any card on the board was copied from `card_id`.
pub fn board_contains_copy_of<S: EventSource>(
    board_id: &BoardId,
    card_id: &CardId,
    source: &S,
) -> Result<bool, FetchError> {
    let events = source.fetch_events(&Scope::Board(board_id.clone()), EventFilter::Copies)?;
    Ok(events
        .iter()
        .any(|event| event.card_source_id() == Some(card_id)))
}
