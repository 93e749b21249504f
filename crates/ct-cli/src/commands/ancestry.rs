//! Ancestry command: the copy chain above a card.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use ct_core::{CachedSource, Card, CardId, Classifier, EventSource, QueryCache, ancestors, origin};

use super::util::{card_label, load_card};

#[derive(Debug, Serialize)]
struct CardRow<'a> {
    id: &'a str,
    name: &'a str,
}

impl<'a> From<&'a Card> for CardRow<'a> {
    fn from(card: &'a Card) -> Self {
        Self {
            id: card.id.as_str(),
            name: &card.name,
        }
    }
}

#[derive(Debug, Serialize)]
struct AncestryReport<'a> {
    card: CardRow<'a>,
    ancestors: Vec<CardRow<'a>>,
    origin: CardRow<'a>,
}

pub fn run<W: Write, S: EventSource>(
    writer: &mut W,
    source: &S,
    card_id: &CardId,
    classifier: &Classifier,
    json: bool,
) -> Result<()> {
    // The origin lookup repeats the ancestor walk; serve it from cache.
    let source = CachedSource::new(source, QueryCache::new());
    let card = load_card(&source, card_id)?;
    let chain = ancestors(&card, &source, classifier)
        .with_context(|| format!("failed to resolve ancestors of {card_id}"))?;
    let root = origin(&card, &source, classifier)
        .with_context(|| format!("failed to resolve origin of {card_id}"))?;

    if json {
        let report = AncestryReport {
            card: CardRow::from(&card),
            ancestors: chain.iter().map(CardRow::from).collect(),
            origin: CardRow::from(&root),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(writer, "Ancestry for {}", card_label(&card))?;
    if chain.is_empty() {
        writeln!(writer, "No ancestors found.")?;
    }
    for (depth, ancestor) in chain.iter().enumerate() {
        writeln!(writer, "{}. {}", depth + 1, card_label(ancestor))?;
    }
    writeln!(writer, "Origin: {}", card_label(&root))?;

    Ok(())
}
