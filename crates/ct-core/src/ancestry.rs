//! Copy provenance: which card a card was copied from, and so on upwards.
//!
//! The walk is inherently sequential since each parent is only known after
//! the previous fetch. Missing or inaccessible ancestors end the walk with
//! whatever was collected so far; other fetch failures abort it.

use std::collections::HashSet;

use crate::card::Card;
use crate::classify::{Classifier, EventFilter, first_creation};
use crate::event::Event;
use crate::event_type::EventType;
use crate::source::{EventSource, FetchError, Scope};
use crate::types::CardId;

/// ID of the card `card` was copied from, if any.
///
/// Uses the first pre-loaded creation action. When none is loaded, fetches
/// the card's copy actions and takes the first one in the order the source
/// returned them.
pub fn parent_id<S: EventSource>(
    card: &Card,
    source: &S,
    classifier: &Classifier,
) -> Result<Option<CardId>, FetchError> {
    if let Some(creation) = first_creation(&card.events, classifier) {
        return Ok(copy_source(creation));
    }

    tracing::debug!(
        card_id = %card.id,
        "creation action not loaded, fetching copy actions"
    );
    let copies = source.fetch_events(&Scope::Card(card.id.clone()), EventFilter::Copies)?;
    Ok(copies
        .iter()
        .find(|event| EventFilter::Copies.matches(event, classifier))
        .and_then(copy_source))
}

fn copy_source(creation: &Event) -> Option<CardId> {
    if creation.kind != EventType::CardCopied {
        return None;
    }
    creation.card_source_id().cloned()
}

/// The card `card` was copied from, or `None` when it was not a copy.
///
/// Fetch failures are returned as-is; use [`FetchError::is_soft_stop`] to
/// tell a deleted or hidden parent from a transport problem.
pub fn find_parent<S: EventSource>(
    card: &Card,
    source: &S,
    classifier: &Classifier,
) -> Result<Option<Card>, FetchError> {
    match parent_id(card, source, classifier)? {
        Some(id) => source.fetch_card(&id).map(Some),
        None => Ok(None),
    }
}

/// Every ancestor of `card`, nearest first.
///
/// Stops quietly at a card with no parent, at a parent that cannot be
/// fetched because it is gone or hidden, or when a parent ID repeats.
pub fn ancestors<S: EventSource>(
    card: &Card,
    source: &S,
    classifier: &Classifier,
) -> Result<Vec<Card>, FetchError> {
    let mut chain: Vec<Card> = Vec::new();
    let mut seen: HashSet<CardId> = HashSet::from([card.id.clone()]);

    loop {
        let child = chain.last().unwrap_or(card);
        let lookup = parent_id(child, source, classifier)
            .and_then(|id| match id {
                Some(id) if seen.contains(&id) => {
                    tracing::warn!(
                        card_id = %child.id,
                        parent_id = %id,
                        "copy chain loops back on itself, stopping"
                    );
                    Ok(None)
                }
                Some(id) => source.fetch_card(&id).map(Some),
                None => Ok(None),
            });

        match lookup {
            Ok(Some(parent)) => {
                seen.insert(parent.id.clone());
                chain.push(parent);
            }
            Ok(None) => break,
            Err(err) if err.is_soft_stop() => {
                tracing::warn!(
                    card_id = %child.id,
                    error = %err,
                    "cannot read parent card, stopping ancestry walk"
                );
                break;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::debug!(card_id = %card.id, depth = chain.len(), "resolved ancestors");
    Ok(chain)
}

/// The oldest reachable ancestor, or `card` itself when it has none.
pub fn origin<S: EventSource>(
    card: &Card,
    source: &S,
    classifier: &Classifier,
) -> Result<Card, FetchError> {
    let mut chain = ancestors(card, source, classifier)?;
    Ok(chain.pop().unwrap_or_else(|| card.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use crate::testing::MemorySource;

    fn card(id: &str) -> Card {
        Card::new(CardId::new(id).unwrap(), format!("Card {id}"))
    }

    fn copy_of(id: &str, parent: &str) -> Card {
        card(id).with_events(vec![copied(0, list("a", "Todo"), parent)])
    }

    fn chain_ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn card_without_copy_has_no_ancestors() {
        let source = MemorySource::default();
        let c = card("c1").with_events(vec![created(0, list("a", "Todo"))]);
        let classifier = Classifier::default();

        assert!(find_parent(&c, &source, &classifier).unwrap().is_none());
        assert!(ancestors(&c, &source, &classifier).unwrap().is_empty());
        assert_eq!(origin(&c, &source, &classifier).unwrap(), c);
        assert_eq!(source.event_fetches(), 0);
    }

    #[test]
    fn walks_full_copy_chain() {
        let mut source = MemorySource::default();
        source.add_card(copy_of("c2", "c3"));
        source.add_card(copy_of("c3", "c4"));
        source.add_card(card("c4").with_events(vec![created(0, list("a", "Todo"))]));
        let classifier = Classifier::default();

        let chain = ancestors(&copy_of("c1", "c2"), &source, &classifier).unwrap();
        assert_eq!(chain_ids(&chain), ["c2", "c3", "c4"]);

        let root = origin(&copy_of("c1", "c2"), &source, &classifier).unwrap();
        assert_eq!(root.id.as_str(), "c4");
    }

    #[test]
    fn falls_back_to_fetching_copy_actions() {
        let mut source = MemorySource::default();
        source.add_events("c1", vec![comment(0), copied(1, list("a", "Todo"), "c2")]);
        source.add_card(card("c2").with_events(vec![created(0, list("a", "Todo"))]));

        let parent = find_parent(&card("c1"), &source, &Classifier::default())
            .unwrap()
            .unwrap();
        assert_eq!(parent.id.as_str(), "c2");
        assert_eq!(source.event_fetches(), 1);
    }

    #[test]
    fn missing_parent_is_a_soft_stop() {
        let mut source = MemorySource::default();
        source.add_card(copy_of("c2", "deleted"));
        let classifier = Classifier::default();

        let chain = ancestors(&copy_of("c1", "c2"), &source, &classifier).unwrap();
        assert_eq!(chain_ids(&chain), ["c2"]);

        let err = find_parent(&copy_of("c1", "deleted"), &source, &classifier).unwrap_err();
        assert!(err.is_soft_stop());
    }

    #[test]
    fn hidden_parent_is_a_soft_stop() {
        let mut source = MemorySource::default();
        source.forbid("c2");

        let chain = ancestors(&copy_of("c1", "c2"), &source, &Classifier::default()).unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn transport_failure_aborts_walk() {
        let mut source = MemorySource::default();
        source.add_card(card("c2"));
        source.fail_events_for("c2");

        let err = ancestors(&copy_of("c1", "c2"), &source, &Classifier::default()).unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn cycle_stops_walk() {
        let mut source = MemorySource::default();
        source.add_card(copy_of("c2", "c3"));
        source.add_card(copy_of("c3", "c2"));
        let classifier = Classifier::default();

        let chain = ancestors(&copy_of("c1", "c2"), &source, &classifier).unwrap();
        assert_eq!(chain_ids(&chain), ["c2", "c3"]);

        let self_copy = copy_of("c9", "c9");
        assert!(ancestors(&self_copy, &source, &classifier).unwrap().is_empty());
    }

    #[test]
    fn non_copy_creation_ignores_card_source() {
        let mut creation = created(0, list("a", "Todo"));
        creation.payload.card_source = copied(0, list("a", "Todo"), "c2").payload.card_source;
        let c = card("c1").with_events(vec![creation]);

        let id = parent_id(&c, &MemorySource::default(), &Classifier::default()).unwrap();
        assert!(id.is_none());
    }
}
