//! Shared helpers for report commands.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};

use ct_core::{Card, CardId, EventSource};

/// Formats a duration as "Xd Yh Zm", "Xh Ym", or "Xm".
/// Negative durations are treated as 0m.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days >= 1 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// "Name (id)" label for a card.
pub fn card_label(card: &Card) -> String {
    format!("{} ({})", card.name, card.id)
}

pub fn load_card<S: EventSource>(source: &S, card_id: &CardId) -> Result<Card> {
    source
        .fetch_card(card_id)
        .with_context(|| format!("failed to load card {card_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_duration_picks_largest_unit() {
        assert_eq!(format_duration(Duration::seconds(59)), "0m");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::minutes(125)), "2h 5m");
        assert_eq!(format_duration(Duration::minutes(60 * 26 + 3)), "1d 2h 3m");
    }

    #[test]
    fn format_duration_clamps_negative() {
        assert_eq!(format_duration(Duration::minutes(-5)), "0m");
    }

    #[test]
    fn format_timestamp_uses_seconds_and_z() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-01T09:00:00Z");
    }
}
