//! Answer Catalog
//!
//! Read-only palette contents and the answer key of a scenario.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::{FieldDescriptor, FieldKey, FieldKind};

/// One draggable answer in the palette
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Candidate {
    Plain(String),
    /// Label chip, rendered with its own color
    Labeled { text: String, color: Option<String> },
}

impl Candidate {
    pub fn plain(text: impl Into<String>) -> Self {
        Candidate::Plain(text.into())
    }

    pub fn labeled(text: impl Into<String>, color: Option<&str>) -> Self {
        Candidate::Labeled { text: text.into(), color: color.map(str::to_string) }
    }

    /// The value written into the card when this candidate is dropped
    pub fn value(&self) -> &str {
        match self {
            Candidate::Plain(text) | Candidate::Labeled { text, .. } => text,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Candidate::Plain(_) => None,
            Candidate::Labeled { color, .. } => color.as_deref(),
        }
    }
}

/// Palette groups keyed by the field they fill
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerCatalog {
    groups: BTreeMap<FieldKey, Vec<Candidate>>,
}

impl AnswerCatalog {
    /// Collect the candidates of every droppable field
    pub fn from_descriptors(fields: &[FieldDescriptor]) -> Self {
        let groups = fields
            .iter()
            .filter_map(|field| match &field.kind {
                FieldKind::Droppable { candidates } => Some((field.key, candidates.clone())),
                FieldKind::Dropdown { .. } => None,
            })
            .collect();
        Self { groups }
    }

    pub fn candidates(&self, key: FieldKey) -> Option<&[Candidate]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    /// Candidate `index` of group `key`; `None` when either is unknown
    pub fn candidate(&self, key: FieldKey, index: usize) -> Option<&Candidate> {
        self.groups.get(&key).and_then(|group| group.get(index))
    }

    /// Palette groups in field order
    pub fn groups(&self) -> impl Iterator<Item = (FieldKey, &[Candidate])> {
        self.groups.iter().map(|(key, group)| (*key, group.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The answer key: one correct value per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectAnswers(BTreeMap<FieldKey, String>);

impl CorrectAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = (FieldKey, S)>,
        S: Into<String>,
    {
        Self(answers.into_iter().map(|(key, value)| (key, value.into())).collect())
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// False for keys outside the answer key
    pub fn is_correct(&self, key: FieldKey, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::droppable(
                FieldKey::Labels,
                vec![
                    Candidate::labeled("Feature", Some("#2b8a3e")),
                    Candidate::labeled("Bug", None),
                ],
            ),
            FieldDescriptor::droppable(
                FieldKey::Title,
                vec![Candidate::plain("A"), Candidate::plain("B")],
            ),
            FieldDescriptor::dropdown(FieldKey::Priority, ["1", "2"]),
        ]
    }

    #[test]
    fn test_catalog_only_holds_droppables() {
        let catalog = AnswerCatalog::from_descriptors(&fields());
        assert_eq!(catalog.len(), 2);
        assert!(catalog.candidates(FieldKey::Priority).is_none());
    }

    #[test]
    fn test_groups_follow_field_order() {
        let catalog = AnswerCatalog::from_descriptors(&fields());
        let keys: Vec<_> = catalog.groups().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![FieldKey::Title, FieldKey::Labels]);
    }

    #[test]
    fn test_candidate_lookup() {
        let catalog = AnswerCatalog::from_descriptors(&fields());
        assert_eq!(catalog.candidate(FieldKey::Labels, 0).map(Candidate::value), Some("Feature"));
        assert_eq!(
            catalog.candidate(FieldKey::Labels, 0).and_then(Candidate::color),
            Some("#2b8a3e")
        );
        assert!(catalog.candidate(FieldKey::Labels, 2).is_none());
        assert!(catalog.candidate(FieldKey::Parent, 0).is_none());
    }

    #[test]
    fn test_correct_answers() {
        let answers = CorrectAnswers::new([(FieldKey::Title, "A"), (FieldKey::Priority, "2")]);
        assert!(answers.is_correct(FieldKey::Title, "A"));
        assert!(!answers.is_correct(FieldKey::Title, ""));
        assert!(!answers.is_correct(FieldKey::Labels, ""));
        assert_eq!(answers.keys().collect::<Vec<_>>(), vec![FieldKey::Title, FieldKey::Priority]);
    }

    #[test]
    fn test_candidate_json_shapes() {
        let plain: Candidate = serde_json::from_str("\"Sprint 1\"").unwrap();
        assert_eq!(plain, Candidate::plain("Sprint 1"));
        let labeled: Candidate = serde_json::from_str(r#"{"text":"Bug","color":null}"#).unwrap();
        assert_eq!(labeled.value(), "Bug");
    }
}
