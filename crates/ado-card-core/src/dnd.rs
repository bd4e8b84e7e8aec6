//! Drop Coordinator
//!
//! Turns a finished drag (source group, index, optional destination) into a
//! card update. Only palette -> field drops change anything; every other
//! route is ignored.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::AnswerCatalog;
use crate::error::Error;
use crate::field::FieldKey;
use crate::state::CardState;

/// Prefix that marks a palette group id (`menu-Title`)
pub const PALETTE_PREFIX: &str = "menu-";

/// Something a drag can start from or end on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DroppableId {
    /// Palette group holding the candidates for a field
    Palette(FieldKey),
    /// Field on the card
    Field(FieldKey),
}

impl DroppableId {
    pub fn key(&self) -> FieldKey {
        match self {
            DroppableId::Palette(key) | DroppableId::Field(key) => *key,
        }
    }
}

impl fmt::Display for DroppableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DroppableId::Palette(key) => write!(f, "{PALETTE_PREFIX}{key}"),
            DroppableId::Field(key) => write!(f, "{key}"),
        }
    }
}

impl FromStr for DroppableId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDroppableId(s.to_string());
        match s.strip_prefix(PALETTE_PREFIX) {
            Some(group) => group.parse().map(DroppableId::Palette).map_err(|_| invalid()),
            None => s.parse().map(DroppableId::Field).map_err(|_| invalid()),
        }
    }
}

/// What is being dragged: candidate `index` of droppable `group`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragSource {
    pub group: DroppableId,
    pub index: usize,
}

impl DragSource {
    pub fn palette(key: FieldKey, index: usize) -> Self {
        Self { group: DroppableId::Palette(key), index }
    }

    /// The drop this drag becomes when released over `destination`
    pub fn released(self, destination: Option<DroppableId>) -> DropEvent {
        DropEvent::new(self.group, self.index, destination)
    }
}

/// A finished drag, independent of how the pointer events were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub source: DroppableId,
    /// Position of the dragged candidate within the source group
    pub index: usize,
    /// `None` when the drag ended outside every target
    pub destination: Option<DroppableId>,
}

impl DropEvent {
    pub fn new(source: DroppableId, index: usize, destination: Option<DroppableId>) -> Self {
        Self { source, index, destination }
    }

    /// Palette candidate dropped onto a card field
    pub fn palette_to_field(group: FieldKey, index: usize, field: FieldKey) -> Self {
        Self::new(DroppableId::Palette(group), index, Some(DroppableId::Field(field)))
    }
}

/// Why a drop left the card untouched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropRejection {
    #[error("drag from {from} cancelled outside any target")]
    Cancelled { from: DroppableId },

    #[error("unsupported drop from {from} to {to}")]
    Unsupported { from: DroppableId, to: DroppableId },

    #[error("no candidate {index} in palette group {group}")]
    UnknownCandidate { group: FieldKey, index: usize },
}

/// Field assignment produced by an accepted drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub key: FieldKey,
    pub value: String,
}

/// Decide what a drop does without touching any state
pub fn resolve_drop(
    catalog: &AnswerCatalog,
    event: &DropEvent,
) -> Result<Placement, DropRejection> {
    let Some(destination) = event.destination else {
        return Err(DropRejection::Cancelled { from: event.source });
    };

    match (event.source, destination) {
        (DroppableId::Palette(group), DroppableId::Field(key)) => catalog
            .candidate(group, event.index)
            .map(|candidate| Placement { key, value: candidate.value().to_string() })
            .ok_or(DropRejection::UnknownCandidate { group, index: event.index }),
        (from, to) => Err(DropRejection::Unsupported { from, to }),
    }
}

/// Apply a drop to the card. Returns the field that changed, if any.
///
/// Rejected drops are logged and otherwise ignored.
pub fn apply_drop(
    state: &mut CardState,
    catalog: &AnswerCatalog,
    event: &DropEvent,
) -> Option<FieldKey> {
    match resolve_drop(catalog, event) {
        Ok(Placement { key, value }) => {
            debug!("[DND] {} <- {:?}", key, value);
            state.set_field(key, Some(&value));
            Some(key)
        }
        Err(rejection) => {
            debug!("[DND] ignored: {rejection}");
            None
        }
    }
}

/// Pure form of [`apply_drop`]
#[must_use]
pub fn reduce_drop(mut state: CardState, catalog: &AnswerCatalog, event: &DropEvent) -> CardState {
    apply_drop(&mut state, catalog, event);
    state
}
