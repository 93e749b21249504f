//! Per-event classification for card lifecycle and list membership.
//!
//! Every predicate looks at one event in isolation. Unknown action types are
//! never list changes and never creations.

use crate::event::{Event, ListRef};
use crate::event_type::EventType;

/// Classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    /// Treat a card arriving from another board as created on this one.
    ///
    /// From the destination board's point of view the card appears out of
    /// nowhere, so this defaults to `true`. Whether that is right for every
    /// caller is unsettled, hence the switch.
    pub moved_to_board_creates: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            moved_to_board_creates: true,
        }
    }
}

impl Classifier {
    /// Whether the event brought the card into existence (on this board).
    pub fn is_card_creation(&self, event: &Event) -> bool {
        match event.kind {
            EventType::CardCreated
            | EventType::CardEmailedIn
            | EventType::CardCopied
            | EventType::CardConvertedFromCheckItem => true,
            EventType::CardMovedToBoard => self.moved_to_board_creates,
            _ => false,
        }
    }

    /// Whether the event archived the card.
    pub fn is_card_archived(&self, event: &Event) -> bool {
        event.kind == EventType::CardUpdated && event.closed_after() == Some(true)
    }

    /// Whether the event took the card out of the archive.
    ///
    /// Only the previous `closed` value is checked. An update that reports
    /// `old.closed = true` while leaving the card closed would still match,
    /// and is excluded from [`Self::is_card_archived`] by the check below so
    /// that the two never hold at once.
    pub fn is_card_unarchived(&self, event: &Event) -> bool {
        event.kind == EventType::CardUpdated
            && event.closed_before() == Some(true)
            && !self.is_card_archived(event)
    }

    /// Whether the event changed which list (if any) the card sits in.
    pub fn is_list_change(&self, event: &Event) -> bool {
        self.is_card_creation(event)
            || self.is_card_archived(event)
            || self.is_card_unarchived(event)
            || (event.kind == EventType::CardUpdated && event.list_after().is_some())
    }

    /// Whether the event added or removed a member.
    pub fn is_membership_change(&self, event: &Event) -> bool {
        matches!(
            event.kind,
            EventType::MemberAddedToCard | EventType::MemberRemovedFromCard
        )
    }

    /// The list the card occupies after `event`, or `None` when it left all
    /// lists.
    ///
    /// Also `None` when the field the event type should carry is missing, so
    /// malformed events are no-ops for residency accounting.
    pub fn resulting_list<'a>(&self, event: &'a Event) -> Option<&'a ListRef> {
        if self.is_card_creation(event) {
            return event.list();
        }
        if event.kind != EventType::CardUpdated || self.is_card_archived(event) {
            return None;
        }
        if self.is_card_unarchived(event) {
            return event.list();
        }
        event.list_after()
    }
}

/// Client-side action filters, evaluated with a [`Classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    All,
    Copies,
    Creations,
    ListChanges,
    /// Membership changes plus archive/unarchive, which implicitly end and
    /// resume membership.
    MembershipChanges,
}

impl EventFilter {
    pub fn matches(self, event: &Event, classifier: &Classifier) -> bool {
        match self {
            Self::All => true,
            Self::Copies => event.kind == EventType::CardCopied,
            Self::Creations => classifier.is_card_creation(event),
            Self::ListChanges => classifier.is_list_change(event),
            Self::MembershipChanges => {
                classifier.is_membership_change(event)
                    || classifier.is_card_archived(event)
                    || classifier.is_card_unarchived(event)
            }
        }
    }

    /// Keeps matching events, preserving input order.
    pub fn apply<'a>(
        self,
        events: &'a [Event],
        classifier: &'a Classifier,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        events
            .iter()
            .filter(move |event| self.matches(event, classifier))
    }
}

/// First creation event in input order.
pub fn first_creation<'a>(events: &'a [Event], classifier: &Classifier) -> Option<&'a Event> {
    events.iter().find(|event| classifier.is_card_creation(event))
}

/// Whether any event in the slice created the card.
pub fn contains_card_creation(events: &[Event], classifier: &Classifier) -> bool {
    first_creation(events, classifier).is_some()
}
