//! Caller-owned cache for fetched cards and action lists.
//!
//! There is no process-wide cache. Callers that want one create a
//! [`QueryCache`] and hand it to a [`CachedSource`] wrapping their real
//! source. Failed fetches are never cached.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::card::Card;
use crate::classify::EventFilter;
use crate::event::Event;
use crate::source::{EventSource, FetchError, Scope};
use crate::types::CardId;

/// Fetched entities keyed by ID.
#[derive(Debug, Default, Clone)]
pub struct QueryCache {
    cards: HashMap<CardId, Card>,
    events: HashMap<(Scope, EventFilter), Vec<Event>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn set_card(&mut self, card: Card) {
        self.cards.insert(card.id.clone(), card);
    }

    pub fn evict_card(&mut self, id: &CardId) -> Option<Card> {
        self.cards.remove(id)
    }

    pub fn get_events(&self, scope: &Scope, filter: EventFilter) -> Option<&[Event]> {
        self.events
            .get(&(scope.clone(), filter))
            .map(Vec::as_slice)
    }

    pub fn set_events(&mut self, scope: Scope, filter: EventFilter, events: Vec<Event>) {
        self.events.insert((scope, filter), events);
    }

    /// Drops every cached action list for `scope`, whatever the filter.
    pub fn evict_events(&mut self, scope: &Scope) {
        self.events.retain(|(cached, _), _| cached != scope);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len() + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An [`EventSource`] that answers from a [`QueryCache`] before asking the
/// wrapped source.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: RefCell<QueryCache>,
}

impl<S: EventSource> CachedSource<S> {
    pub fn new(inner: S, cache: QueryCache) -> Self {
        Self {
            inner,
            cache: RefCell::new(cache),
        }
    }

    /// Returns the wrapped source and the cache as it stands.
    pub fn into_parts(self) -> (S, QueryCache) {
        (self.inner, self.cache.into_inner())
    }

    pub fn evict_card(&self, id: &CardId) {
        self.cache.borrow_mut().evict_card(id);
        self.cache.borrow_mut().evict_events(&Scope::Card(id.clone()));
    }
}

impl<S: EventSource> EventSource for CachedSource<S> {
    fn fetch_events(&self, scope: &Scope, filter: EventFilter) -> Result<Vec<Event>, FetchError> {
        if let Some(events) = self.cache.borrow().get_events(scope, filter) {
            tracing::debug!(%scope, ?filter, "action cache hit");
            return Ok(events.to_vec());
        }
        let events = self.inner.fetch_events(scope, filter)?;
        self.cache
            .borrow_mut()
            .set_events(scope.clone(), filter, events.clone());
        Ok(events)
    }

    fn fetch_card(&self, card_id: &CardId) -> Result<Card, FetchError> {
        if let Some(card) = self.cache.borrow().get_card(card_id) {
            tracing::debug!(%card_id, "card cache hit");
            return Ok(card.clone());
        }
        let card = self.inner.fetch_card(card_id)?;
        self.cache.borrow_mut().set_card(card.clone());
        Ok(card)
    }
}
