//! Card State
//!
//! Current value of every field on the card. An empty string means unset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::CorrectAnswers;
use crate::field::FieldKey;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    fields: BTreeMap<FieldKey, String>,
}

impl CardState {
    /// Empty card with an entry for every key
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = FieldKey>,
    {
        Self { fields: keys.into_iter().map(|key| (key, String::new())).collect() }
    }

    /// Empty card covering every key of the answer key
    pub fn for_answers(correct: &CorrectAnswers) -> Self {
        Self::new(correct.keys())
    }

    /// `""` for unset or unknown fields
    pub fn get(&self, key: FieldKey) -> &str {
        self.fields.get(&key).map_or("", String::as_str)
    }

    pub fn is_set(&self, key: FieldKey) -> bool {
        !self.get(key).is_empty()
    }

    /// Overwrite one field; `None` clears it
    pub fn set_field(&mut self, key: FieldKey, value: Option<&str>) {
        self.fields.insert(key, value.unwrap_or_default().to_string());
    }

    pub fn clear_field(&mut self, key: FieldKey) {
        self.set_field(key, None);
    }

    /// Pure form of [`CardState::set_field`]
    #[must_use]
    pub fn with_field(mut self, key: FieldKey, value: Option<&str>) -> Self {
        self.set_field(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.fields.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn field_correct(&self, correct: &CorrectAnswers, key: FieldKey) -> bool {
        correct.is_correct(key, self.get(key))
    }

    /// True iff every key of the answer key holds its correct value
    pub fn all_correct(&self, correct: &CorrectAnswers) -> bool {
        correct.iter().all(|(key, answer)| self.get(key) == answer)
    }
}
