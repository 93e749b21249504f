//! The fetch collaborator the core relies on for I/O.
//!
//! Implementations own transport, auth, pagination, and retries. Calls are
//! blocking from the core's point of view; any cancellation is the
//! implementation's business and surfaces as a [`FetchError`].

use std::fmt;

use thiserror::Error;

use crate::card::Card;
use crate::classify::EventFilter;
use crate::event::Event;
use crate::types::{BoardId, CardId, ListId};

/// Failures reported by an [`EventSource`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested object does not exist (or was deleted).
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The credentials in use cannot see the requested object.
    #[error("permission denied: {resource}")]
    PermissionDenied { resource: String },

    /// Any other transport or decoding failure, including rate limits the
    /// source gave up retrying.
    #[error("transport failure: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Missing or inaccessible objects end a multi-step walk quietly.
    pub const fn is_soft_stop(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::PermissionDenied { .. })
    }
}

/// What a set of actions is fetched for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Card(CardId),
    Board(BoardId),
    List(ListId),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card(id) => write!(f, "cards/{id}"),
            Self::Board(id) => write!(f, "boards/{id}"),
            Self::List(id) => write!(f, "lists/{id}"),
        }
    }
}

/// Source of cards and their action history.
pub trait EventSource {
    /// Fetches actions for `scope`. Implementations may filter server-side;
    /// callers re-check `filter` on the results.
    fn fetch_events(&self, scope: &Scope, filter: EventFilter) -> Result<Vec<Event>, FetchError>;

    /// Fetches the current snapshot of a card.
    fn fetch_card(&self, card_id: &CardId) -> Result<Card, FetchError>;
}

impl<S: EventSource + ?Sized> EventSource for &S {
    fn fetch_events(&self, scope: &Scope, filter: EventFilter) -> Result<Vec<Event>, FetchError> {
        (**self).fetch_events(scope, filter)
    }

    fn fetch_card(&self, card_id: &CardId) -> Result<Card, FetchError> {
        (**self).fetch_card(card_id)
    }
}
