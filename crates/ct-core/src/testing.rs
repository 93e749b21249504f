//! In-memory [`EventSource`] for unit tests.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use crate::card::Card;
use crate::classify::{Classifier, EventFilter};
use crate::event::Event;
use crate::source::{EventSource, FetchError, Scope};
use crate::types::{BoardId, CardId};

#[derive(Debug, Default)]
pub struct MemorySource {
    cards: HashMap<CardId, Card>,
    events: HashMap<Scope, Vec<Event>>,
    forbidden: HashSet<CardId>,
    failing: HashSet<CardId>,
    event_fetches: Cell<usize>,
    card_fetches: Cell<usize>,
}

impl MemorySource {
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(card.id.clone(), card);
    }

    pub fn add_events(&mut self, card_id: &str, events: Vec<Event>) {
        let scope = Scope::Card(CardId::new(card_id).unwrap());
        self.events.insert(scope, events);
    }

    pub fn add_board_events(&mut self, board_id: &str, events: Vec<Event>) {
        let scope = Scope::Board(BoardId::new(board_id).unwrap());
        self.events.insert(scope, events);
    }

    pub fn forbid(&mut self, card_id: &str) {
        self.forbidden.insert(CardId::new(card_id).unwrap());
    }

    pub fn fail_events_for(&mut self, card_id: &str) {
        self.failing.insert(CardId::new(card_id).unwrap());
    }

    pub fn event_fetches(&self) -> usize {
        self.event_fetches.get()
    }

    pub fn card_fetches(&self) -> usize {
        self.card_fetches.get()
    }
}

impl EventSource for MemorySource {
    fn fetch_events(&self, scope: &Scope, filter: EventFilter) -> Result<Vec<Event>, FetchError> {
        self.event_fetches.set(self.event_fetches.get() + 1);
        if let Scope::Card(id) = scope {
            if self.failing.contains(id) {
                return Err(FetchError::transport(format!("{scope}/actions: boom")));
            }
        }
        let classifier = Classifier::default();
        Ok(self
            .events
            .get(scope)
            .map(|events| filter.apply(events, &classifier).cloned().collect())
            .unwrap_or_default())
    }

    fn fetch_card(&self, card_id: &CardId) -> Result<Card, FetchError> {
        self.card_fetches.set(self.card_fetches.get() + 1);
        let resource = format!("cards/{card_id}");
        if self.forbidden.contains(card_id) {
            return Err(FetchError::PermissionDenied { resource });
        }
        self.cards
            .get(card_id)
            .cloned()
            .ok_or(FetchError::NotFound { resource })
    }
}
