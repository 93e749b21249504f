//! Event fixtures shared by unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::event::{CardSnapshot, Event, ListRef, MemberRef, Payload};
use crate::event_type::EventType;
use crate::types::{CardId, EventId, ListId, MemberId};

pub fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// `base()` plus the given number of minutes.
pub fn at(minutes: i64) -> DateTime<Utc> {
    base() + Duration::minutes(minutes)
}

pub fn list(id: &str, name: &str) -> ListRef {
    ListRef::new(ListId::new(id).unwrap(), name)
}

pub fn bare(kind: &str, minutes: i64) -> Event {
    Event::new(
        EventId::new(format!("{kind}-{minutes}")).unwrap(),
        EventType::from(kind),
        at(minutes),
    )
}

pub fn created(minutes: i64, to: ListRef) -> Event {
    bare("createCard", minutes).with_payload(Payload {
        list: Some(to),
        ..Default::default()
    })
}

pub fn copied(minutes: i64, to: ListRef, source: &str) -> Event {
    bare("copyCard", minutes).with_payload(Payload {
        list: Some(to),
        card_source: Some(CardSnapshot {
            id: Some(CardId::new(source).unwrap()),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn moved(minutes: i64, to: ListRef) -> Event {
    bare("updateCard", minutes).with_payload(Payload {
        list_after: Some(to),
        ..Default::default()
    })
}

pub fn archived(minutes: i64) -> Event {
    bare("updateCard", minutes).with_payload(Payload {
        card_after: Some(CardSnapshot {
            closed: Some(true),
            ..Default::default()
        }),
        card_before: Some(CardSnapshot {
            closed: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn unarchived(minutes: i64, back_to: ListRef) -> Event {
    bare("updateCard", minutes).with_payload(Payload {
        list: Some(back_to),
        card_after: Some(CardSnapshot {
            closed: Some(false),
            ..Default::default()
        }),
        card_before: Some(CardSnapshot {
            closed: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn comment(minutes: i64) -> Event {
    bare("commentCard", minutes).with_payload(Payload {
        text: Some("looks good".to_string()),
        ..Default::default()
    })
}

fn member(id: &str) -> MemberRef {
    MemberRef {
        id: MemberId::new(id).unwrap(),
        full_name: format!("Member {id}"),
    }
}

pub fn member_added(minutes: i64, id: &str) -> Event {
    bare("addMemberToCard", minutes).with_member(member(id))
}

pub fn member_removed(minutes: i64, id: &str) -> Event {
    bare("removeMemberFromCard", minutes).with_member(member(id))
}
