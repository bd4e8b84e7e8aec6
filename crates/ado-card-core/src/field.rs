//! Card Fields
//!
//! The fixed set of slots on a work-item card and how each one is filled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Candidate;
use crate::error::Error;

/// A named slot on the card.
///
/// Declaration order is the palette order and the iteration order of every
/// map keyed by `FieldKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "Title")]
    Title,
    #[serde(rename = "Labels")]
    Labels,
    #[serde(rename = "Description")]
    Description,
    #[serde(rename = "Acceptance Criteria")]
    AcceptanceCriteria,
    #[serde(rename = "Parent")]
    Parent,
    #[serde(rename = "Related")]
    Related,
    #[serde(rename = "assignedTo")]
    AssignedTo,
    #[serde(rename = "state")]
    State,
    #[serde(rename = "area")]
    Area,
    #[serde(rename = "reason")]
    Reason,
    #[serde(rename = "iteration")]
    Iteration,
    #[serde(rename = "storyPoints")]
    StoryPoints,
    #[serde(rename = "priority")]
    Priority,
}

impl FieldKey {
    /// Every key, in declaration order
    pub const ALL: [FieldKey; 13] = [
        FieldKey::Title,
        FieldKey::Labels,
        FieldKey::Description,
        FieldKey::AcceptanceCriteria,
        FieldKey::Parent,
        FieldKey::Related,
        FieldKey::AssignedTo,
        FieldKey::State,
        FieldKey::Area,
        FieldKey::Reason,
        FieldKey::Iteration,
        FieldKey::StoryPoints,
        FieldKey::Priority,
    ];

    /// Stable identifier, used as the droppable id of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "Title",
            FieldKey::Labels => "Labels",
            FieldKey::Description => "Description",
            FieldKey::AcceptanceCriteria => "Acceptance Criteria",
            FieldKey::Parent => "Parent",
            FieldKey::Related => "Related",
            FieldKey::AssignedTo => "assignedTo",
            FieldKey::State => "state",
            FieldKey::Area => "area",
            FieldKey::Reason => "reason",
            FieldKey::Iteration => "iteration",
            FieldKey::StoryPoints => "storyPoints",
            FieldKey::Priority => "priority",
        }
    }

    /// Human label shown next to the field on the card
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::AssignedTo => "Assigned to",
            FieldKey::State => "State",
            FieldKey::Area => "Area",
            FieldKey::Reason => "Reason",
            FieldKey::Iteration => "Iteration",
            FieldKey::StoryPoints => "Story Points",
            FieldKey::Priority => "Priority",
            other => other.as_str(),
        }
    }

    /// CSS-friendly class name (`Acceptance Criteria` -> `acceptance-criteria`)
    pub fn css_class(&self) -> String {
        self.label().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// How a field gets its value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldKind {
    /// Filled by dragging a palette candidate onto it
    Droppable { candidates: Vec<Candidate> },
    /// Filled by picking one of a fixed list of options
    Dropdown { options: Vec<String> },
}

/// A field together with the way it is filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn droppable(key: FieldKey, candidates: Vec<Candidate>) -> Self {
        Self { key, kind: FieldKind::Droppable { candidates } }
    }

    pub fn dropdown<I, S>(key: FieldKey, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key,
            kind: FieldKind::Dropdown { options: options.into_iter().map(Into::into).collect() },
        }
    }

    pub fn is_droppable(&self) -> bool {
        matches!(self.kind, FieldKind::Droppable { .. })
    }

    /// Whether `value` can be produced by this field at all
    pub fn accepts(&self, value: &str) -> bool {
        match &self.kind {
            FieldKind::Droppable { candidates } => candidates.iter().any(|c| c.value() == value),
            FieldKind::Dropdown { options } => options.iter().any(|o| o == value),
        }
    }

    /// Text shown while the field is unset
    pub fn placeholder(&self) -> String {
        match self.kind {
            FieldKind::Droppable { .. } => format!("Drag {} here", self.key),
            FieldKind::Dropdown { .. } => "Select an option".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ids_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(key.as_str().parse::<FieldKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = "Severity".parse::<FieldKey>().unwrap_err();
        assert!(matches!(err, Error::UnknownField(name) if name == "Severity"));
    }

    #[test]
    fn test_labels_and_classes() {
        assert_eq!(FieldKey::StoryPoints.label(), "Story Points");
        assert_eq!(FieldKey::AssignedTo.label(), "Assigned to");
        assert_eq!(FieldKey::AcceptanceCriteria.label(), "Acceptance Criteria");
        assert_eq!(FieldKey::AcceptanceCriteria.css_class(), "acceptance-criteria");
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&FieldKey::StoryPoints).unwrap();
        assert_eq!(json, "\"storyPoints\"");
    }

    #[test]
    fn test_placeholders() {
        let title = FieldDescriptor::droppable(FieldKey::Title, vec![]);
        assert_eq!(title.placeholder(), "Drag Title here");
        let priority = FieldDescriptor::dropdown(FieldKey::Priority, ["1", "2"]);
        assert_eq!(priority.placeholder(), "Select an option");
        assert!(priority.accepts("2"));
        assert!(!priority.accepts("7"));
    }
}
