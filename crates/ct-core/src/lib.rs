//! Core logic for card timelines.
//!
//! This crate contains the types and algorithms for:
//! - Classification: what an action means for a card's list and members
//! - Timelines: how long a card sat in each list, and who was assigned when
//! - Ancestry: following copy provenance back to a card's origin
//!
//! All I/O goes through the [`EventSource`] trait supplied by the caller.

pub mod ancestry;
pub mod cache;
mod card;
pub mod classify;
pub mod event;
pub mod event_type;
mod membership;
mod source;
mod timeline;
pub mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod testing;

pub use ancestry::{ancestors, find_parent, origin, parent_id};
pub use cache::{CachedSource, QueryCache};
pub use card::{
    Card, board_contains_copy_of, card_list_durations, card_member_durations, creator_member_id,
};
pub use classify::{Classifier, EventFilter};
pub use event::{Event, ListRef, MemberRef, Payload};
pub use event_type::EventType;
pub use membership::{MemberDuration, member_durations, member_durations_at};
pub use source::{EventSource, FetchError, Scope};
pub use timeline::{ListDuration, list_durations, list_durations_at};
pub use types::{BoardId, CardId, EventId, ListId, MemberId, ValidationError};
