//! Members command: how long each member was assigned to a card.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use ct_core::{CardId, Classifier, EventSource, MemberDuration, card_member_durations};

use super::util::{card_label, format_duration, format_timestamp, load_card};

#[derive(Debug, Serialize)]
struct MemberRow<'a> {
    member_id: &'a str,
    member_name: &'a str,
    total_ms: i64,
    first_added: DateTime<Utc>,
    active: bool,
}

impl<'a> From<&'a MemberDuration> for MemberRow<'a> {
    fn from(d: &'a MemberDuration) -> Self {
        Self {
            member_id: d.member_id.as_str(),
            member_name: &d.member_name,
            total_ms: d.total_duration.num_milliseconds(),
            first_added: d.first_added,
            active: d.active,
        }
    }
}

pub fn run<W: Write, S: EventSource>(
    writer: &mut W,
    source: &S,
    card_id: &CardId,
    classifier: &Classifier,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let card = load_card(source, card_id)?;
    let durations = card_member_durations(&card, source, classifier, now)?;

    if json {
        let rows: Vec<MemberRow<'_>> = durations.iter().map(MemberRow::from).collect();
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    writeln!(writer, "Member durations for {}", card_label(&card))?;
    if durations.is_empty() {
        writeln!(writer, "No members assigned.")?;
        return Ok(());
    }

    for d in &durations {
        let status = if d.active { ", still assigned" } else { "" };
        writeln!(
            writer,
            "- {} ({}): {} (first added {}{status})",
            d.member_name,
            d.member_id,
            format_duration(d.total_duration),
            format_timestamp(d.first_added),
        )?;
    }

    Ok(())
}
