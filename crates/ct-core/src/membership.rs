//! Member assignment durations.
//!
//! Same fold shape as [`crate::timeline`], keyed by member instead of list.
//! Archiving a card ends every open assignment; unarchiving resumes the
//! members that were on the card when it was archived. Membership changes
//! while archived only edit that paused set: a removed member stays off the
//! card, and a member added to an archived card starts accruing time at the
//! unarchive.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::classify::{Classifier, EventFilter};
use crate::event::Event;
use crate::event_type::EventType;
use crate::types::MemberId;

/// Time a member spent assigned to a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDuration {
    pub member_id: MemberId,
    pub member_name: String,
    pub first_added: DateTime<Utc>,
    pub total_duration: Duration,
    /// Still assigned when the fold ended.
    pub active: bool,
}

#[derive(Debug)]
struct Assignment {
    summary: MemberDuration,
    since: Option<DateTime<Utc>>,
}

impl Assignment {
    fn start(&mut self, at: DateTime<Utc>) {
        if self.since.is_none() {
            self.since = Some(at);
        }
    }

    fn stop(&mut self, at: DateTime<Utc>) {
        if let Some(since) = self.since.take() {
            self.summary.total_duration += (at - since).max(Duration::zero());
        }
    }
}

/// Computes member durations with open assignments closed at the current
/// time.
pub fn member_durations(events: &[Event], classifier: &Classifier) -> Vec<MemberDuration> {
    member_durations_at(events, classifier, Utc::now())
}

/// Computes member durations, closing open assignments at `now`.
pub fn member_durations_at(
    events: &[Event],
    classifier: &Classifier,
    now: DateTime<Utc>,
) -> Vec<MemberDuration> {
    let mut changes: Vec<&Event> = EventFilter::MembershipChanges
        .apply(events, classifier)
        .collect();
    changes.sort_by_key(|event| event.timestamp);

    let mut order: Vec<MemberId> = Vec::new();
    let mut assignments: HashMap<MemberId, Assignment> = HashMap::new();
    // Members waiting for the card to come back out of the archive.
    let mut paused: Vec<MemberId> = Vec::new();
    let mut archived = false;

    for event in &changes {
        if classifier.is_membership_change(event) {
            let Some(member) = &event.member else {
                tracing::debug!(event_id = %event.id, "membership action without a member");
                continue;
            };
            let assignment = assignments.entry(member.id.clone()).or_insert_with(|| {
                order.push(member.id.clone());
                Assignment {
                    summary: MemberDuration {
                        member_id: member.id.clone(),
                        member_name: member.full_name.clone(),
                        first_added: event.timestamp,
                        total_duration: Duration::zero(),
                        active: false,
                    },
                    since: None,
                }
            });
            match (&event.kind, archived) {
                (EventType::MemberAddedToCard, false) => assignment.start(event.timestamp),
                (EventType::MemberAddedToCard, true) => {
                    if !paused.contains(&member.id) {
                        paused.push(member.id.clone());
                    }
                }
                _ => {
                    assignment.stop(event.timestamp);
                    paused.retain(|id| id != &member.id);
                }
            }
        } else if classifier.is_card_archived(event) {
            if archived {
                tracing::debug!(
                    event_id = %event.id,
                    "card archived twice; keeping paused members"
                );
                continue;
            }
            archived = true;
            for id in &order {
                if let Some(assignment) = assignments.get_mut(id).filter(|a| a.since.is_some()) {
                    assignment.stop(event.timestamp);
                    paused.push(id.clone());
                }
            }
        } else if classifier.is_card_unarchived(event) {
            archived = false;
            for id in paused.drain(..) {
                if let Some(assignment) = assignments.get_mut(&id) {
                    assignment.start(event.timestamp);
                }
            }
        }
    }

    let mut durations: Vec<MemberDuration> = order
        .into_iter()
        .filter_map(|id| assignments.remove(&id))
        .map(|mut assignment| {
            assignment.summary.active = assignment.since.is_some();
            assignment.stop(now);
            assignment.summary
        })
        .collect();
    durations.sort_by_key(|d| d.first_added);
    durations
}
