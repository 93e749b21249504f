//! Durations command: time a card spent in each list.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use ct_core::{CardId, Classifier, EventSource, ListDuration, card_list_durations};

use super::util::{card_label, format_duration, format_timestamp, load_card};

/// JSON row for one list.
#[derive(Debug, Serialize)]
struct DurationRow<'a> {
    list_id: &'a str,
    list_name: &'a str,
    total_ms: i64,
    visit_count: u32,
    first_entered: DateTime<Utc>,
}

impl<'a> From<&'a ListDuration> for DurationRow<'a> {
    fn from(d: &'a ListDuration) -> Self {
        Self {
            list_id: d.list_id.as_str(),
            list_name: &d.list_name,
            total_ms: d.total_duration.num_milliseconds(),
            visit_count: d.visit_count,
            first_entered: d.first_entered,
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
    let durations = card_list_durations(&card, source, classifier, now)?;

    if json {
        let rows: Vec<DurationRow<'_>> = durations.iter().map(DurationRow::from).collect();
        writeln!(writer, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    writeln!(writer, "List durations for {}", card_label(&card))?;
    if durations.is_empty() {
        writeln!(writer, "No list changes recorded.")?;
        return Ok(());
    }

    for d in &durations {
        let visits = if d.visit_count == 1 { "visit" } else { "visits" };
        writeln!(
            writer,
            "- {}: {} ({} {visits}, first entered {})",
            d.list_name,
            format_duration(d.total_duration),
            d.visit_count,
            format_timestamp(d.first_entered),
        )?;
    }

    Ok(())
}
