//! List residency timeline.
//!
//! Folds a card's actions into how long it sat in each list.
//!
//! # Algorithm Summary
//!
//! 1. Keep only list-change actions and stable-sort them by timestamp
//! 2. Walk them, charging the gap since the previous action to the list the
//!    card was in before this action
//! 3. If the card is still in a list at the end, charge the tail up to `now`
//! 4. Return one aggregate per list, ordered by first entry

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::classify::Classifier;
use crate::event::{Event, ListRef};
use crate::types::ListId;

/// Time a card spent in one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDuration {
    pub list_id: ListId,

    /// List name as of the action that first put the card there.
    pub list_name: String,

    /// Sum of every residency interval in this list.
    pub total_duration: Duration,

    /// Start of the earliest residency interval.
    pub first_entered: DateTime<Utc>,

    /// Number of separate residency intervals. Always at least 1.
    pub visit_count: u32,
}

impl ListDuration {
    fn add_visit(&mut self, duration: Duration) {
        self.total_duration += duration;
        self.visit_count += 1;
    }
}

/// Accumulates intervals per list, remembering first-seen order.
#[derive(Debug, Default)]
struct Accumulator {
    durations: Vec<ListDuration>,
    index: HashMap<ListId, usize>,
}

impl Accumulator {
    fn charge(&mut self, list: &ListRef, start: DateTime<Utc>, end: DateTime<Utc>) {
        let duration = end - start;
        if let Some(&i) = self.index.get(&list.id) {
            self.durations[i].add_visit(duration);
        } else {
            self.index.insert(list.id.clone(), self.durations.len());
            self.durations.push(ListDuration {
                list_id: list.id.clone(),
                list_name: list.name.clone(),
                total_duration: duration,
                first_entered: start,
                visit_count: 1,
            });
        }
    }

    fn finish(mut self) -> Vec<ListDuration> {
        self.durations.sort_by_key(|d| d.first_entered);
        self.durations
    }
}

/// Computes list durations with the open tail measured against the current
/// time, so repeated calls return growing totals for a card that is still
/// in a list.
pub fn list_durations(events: &[Event], classifier: &Classifier) -> Vec<ListDuration> {
    list_durations_at(events, classifier, Utc::now())
}

/// Computes list durations, closing any open interval at `now`.
///
/// Events may arrive in any order and may include actions unrelated to
/// lists; both are handled here. An input with no list changes yields an
/// empty result.
pub fn list_durations_at(
    events: &[Event],
    classifier: &Classifier,
    now: DateTime<Utc>,
) -> Vec<ListDuration> {
    let mut changes: Vec<&Event> = events
        .iter()
        .filter(|event| classifier.is_list_change(event))
        .collect();
    changes.sort_by_key(|event| event.timestamp);

    let mut acc = Accumulator::default();
    let mut current: Option<(&ListRef, DateTime<Utc>)> = None;

    for event in &changes {
        if let Some((list, since)) = current {
            acc.charge(list, since, event.timestamp);
        }
        current = classifier
            .resulting_list(event)
            .map(|list| (list, event.timestamp));
    }

    if let Some((list, since)) = current {
        let end = if now < since {
            tracing::warn!(
                list_id = %list.id,
                %since,
                %now,
                "last list change is in the future, clamping open interval to zero"
            );
            since
        } else {
            now
        };
        acc.charge(list, since, end);
    }

    let durations = acc.finish();
    tracing::debug!(
        change_count = changes.len(),
        list_count = durations.len(),
        "computed list durations"
    );
    durations
}
