//! Creator command: the member who created a card.

use std::io::Write;

use anyhow::Result;

use ct_core::{CardId, Classifier, EventSource, creator_member_id};

use super::util::{card_label, load_card};

pub fn run<W: Write, S: EventSource>(
    writer: &mut W,
    source: &S,
    card_id: &CardId,
    classifier: &Classifier,
) -> Result<()> {
    let card = load_card(source, card_id)?;
    match creator_member_id(&card, source, classifier)? {
        Some(member) => writeln!(writer, "{} was created by {member}", card_label(&card))?,
        None => writeln!(writer, "{} has no recorded creator", card_label(&card))?,
    }
    Ok(())
}
