//! Board export files as an [`EventSource`].
//!
//! A board export is the JSON document the service produces for a whole
//! board: its cards and its action history. Cards that live on other boards
//! are not in the file and fetch as not found.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use ct_core::{
    BoardId, Card, CardId, Classifier, Event, EventFilter, EventSource, FetchError, Scope,
};

/// Errors loading an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parsed board export.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardExport {
    #[serde(default)]
    pub id: Option<BoardId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub actions: Vec<Event>,
}

impl BoardExport {
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let export: Self = serde_json::from_str(&content).map_err(|source| ExportError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            cards = export.cards.len(),
            actions = export.actions.len(),
            "loaded board export"
        );
        Ok(export)
    }

    fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    fn in_scope(&self, event: &Event, scope: &Scope) -> bool {
        match scope {
            Scope::Card(id) => event.card_id() == Some(id),
            Scope::Board(id) => {
                event.board_id() == Some(id)
                    || (event.board_id().is_none() && self.id.as_ref() == Some(id))
            }
            Scope::List(id) => event.touches_list(id),
        }
    }
}

/// Serves fetches from a loaded [`BoardExport`].
#[derive(Debug)]
pub struct ExportSource {
    export: BoardExport,
    classifier: Classifier,
}

impl ExportSource {
    pub const fn new(export: BoardExport, classifier: Classifier) -> Self {
        Self { export, classifier }
    }

    pub fn open(path: &Path, classifier: Classifier) -> Result<Self, ExportError> {
        Ok(Self::new(BoardExport::load(path)?, classifier))
    }
}

impl EventSource for ExportSource {
    fn fetch_events(&self, scope: &Scope, filter: EventFilter) -> Result<Vec<Event>, FetchError> {
        if let Scope::Card(id) = scope {
            if self.export.card(id).is_none() {
                return Err(FetchError::NotFound {
                    resource: scope.to_string(),
                });
            }
        }
        Ok(self
            .export
            .actions
            .iter()
            .filter(|event| self.export.in_scope(event, scope))
            .filter(|event| filter.matches(event, &self.classifier))
            .cloned()
            .collect())
    }

    fn fetch_card(&self, card_id: &CardId) -> Result<Card, FetchError> {
        self.export
            .card(card_id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                resource: format!("cards/{card_id}"),
            })
    }
}
