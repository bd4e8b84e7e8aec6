//! Scenarios
//!
//! A scenario is one card puzzle: the fields on the card, the palette that
//! fills them and the answer key. A campaign is the ordered list of
//! scenarios the player walks through with "Proceed".

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::{AnswerCatalog, CorrectAnswers};
use crate::error::{Error, Result};
use crate::field::{FieldDescriptor, FieldKey};
use crate::scenarios;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    pub id: String,
    /// Header text, e.g. `USER STORY`
    pub work_item_type: String,
    pub icon: String,
    /// Shown in the card header next to the type
    pub card_id: String,
    pub prompt: String,
    fields: Vec<FieldDescriptor>,
    correct: CorrectAnswers,
    #[serde(skip)]
    catalog: AnswerCatalog,
}

impl Scenario {
    pub fn new(
        id: impl Into<String>,
        work_item_type: impl Into<String>,
        icon: impl Into<String>,
        card_id: impl Into<String>,
        prompt: impl Into<String>,
        fields: Vec<FieldDescriptor>,
        correct: CorrectAnswers,
    ) -> Self {
        let catalog = AnswerCatalog::from_descriptors(&fields);
        Self {
            id: id.into(),
            work_item_type: work_item_type.into(),
            icon: icon.into(),
            card_id: card_id.into(),
            prompt: prompt.into(),
            fields,
            correct,
            catalog,
        }
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, key: FieldKey) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn catalog(&self) -> &AnswerCatalog {
        &self.catalog
    }

    pub fn correct(&self) -> &CorrectAnswers {
        &self.correct
    }

    /// Check that every answer in the key can actually be placed on the card
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if !seen.insert(field.key) {
                return Err(Error::DuplicateField { scenario: self.id.clone(), key: field.key });
            }
            let no_candidates = self.catalog.candidates(field.key).map_or(true, <[_]>::is_empty);
            if field.is_droppable() && no_candidates {
                return Err(Error::EmptyPalette { scenario: self.id.clone(), key: field.key });
            }
        }

        for (key, answer) in self.correct.iter() {
            let field = self
                .field(key)
                .ok_or_else(|| Error::MissingField { scenario: self.id.clone(), key })?;
            if !field.accepts(answer) {
                return Err(Error::UnreachableAnswer {
                    scenario: self.id.clone(),
                    key,
                    answer: answer.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Ordered scenarios walked through with "Proceed"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    scenarios: Vec<Scenario>,
}

impl Campaign {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// The compiled-in levels
    pub fn builtin() -> Self {
        Self::new(scenarios::all())
    }

    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    /// Index of the level after `index`; `None` after the last one
    pub fn next_after(&self, index: usize) -> Option<usize> {
        let next = index + 1;
        (next < self.scenarios.len()).then_some(next)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        self.scenarios.iter().try_for_each(Scenario::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Candidate;

    fn tiny(correct: CorrectAnswers, fields: Vec<FieldDescriptor>) -> Scenario {
        Scenario::new("tiny", "TASK", "📋", "T1", "", fields, correct)
    }

    #[test]
    fn test_builtin_campaign_validates() {
        let campaign = Campaign::builtin();
        assert!(campaign.len() >= 2);
        campaign.validate().unwrap();
    }

    #[test]
    fn test_next_after() {
        let campaign = Campaign::builtin();
        assert_eq!(campaign.next_after(0), Some(1));
        assert_eq!(campaign.next_after(campaign.len() - 1), None);
    }

    #[test]
    fn test_unreachable_answer() {
        let scenario = tiny(
            CorrectAnswers::new([(FieldKey::Priority, "9")]),
            vec![FieldDescriptor::dropdown(FieldKey::Priority, ["1", "2"])],
        );
        let err = scenario.validate().unwrap_err();
        assert!(matches!(err, Error::UnreachableAnswer { key: FieldKey::Priority, .. }));
    }

    #[test]
    fn test_missing_field() {
        let scenario = tiny(CorrectAnswers::new([(FieldKey::Title, "A")]), vec![]);
        assert_eq!(
            scenario.validate(),
            Err(Error::MissingField { scenario: "tiny".into(), key: FieldKey::Title })
        );
    }

    #[test]
    fn test_duplicate_and_empty_fields() {
        let duplicated = tiny(
            CorrectAnswers::default(),
            vec![
                FieldDescriptor::dropdown(FieldKey::Area, ["Frontend"]),
                FieldDescriptor::dropdown(FieldKey::Area, ["Backend"]),
            ],
        );
        assert!(matches!(duplicated.validate(), Err(Error::DuplicateField { .. })));

        let empty = tiny(
            CorrectAnswers::default(),
            vec![FieldDescriptor::droppable(FieldKey::Title, vec![])],
        );
        assert!(matches!(empty.validate(), Err(Error::EmptyPalette { .. })));

        let ok = tiny(
            CorrectAnswers::new([(FieldKey::Title, "A")]),
            vec![FieldDescriptor::droppable(FieldKey::Title, vec![Candidate::plain("A")])],
        );
        assert!(ok.validate().is_ok());
    }
}
