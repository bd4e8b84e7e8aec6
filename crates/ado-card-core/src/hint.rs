//! Hints
//!
//! Hints look at the card and point the player at something to fix. They
//! never change the card.

use serde::Serialize;

use crate::field::{FieldKey, FieldKind};
use crate::scenario::Scenario;
use crate::state::CardState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// Field the hint is about; `None` once the card is complete
    pub field: Option<FieldKey>,
    pub message: String,
}

pub trait HintProvider {
    fn hint(&self, scenario: &Scenario, state: &CardState) -> Hint;
}

/// Names the first field, in card order, that is not yet correct
#[derive(Debug, Clone, Copy, Default)]
pub struct NextFieldHint;

impl HintProvider for NextFieldHint {
    fn hint(&self, scenario: &Scenario, state: &CardState) -> Hint {
        let correct = scenario.correct();
        let Some(key) = correct.keys().find(|key| !state.field_correct(correct, *key)) else {
            return Hint {
                field: None,
                message: "Everything is in place. Hit Proceed!".to_string(),
            };
        };

        let label = key.label();
        let message = match (state.is_set(key), scenario.field(key).map(|field| &field.kind)) {
            (true, _) => format!("Take another look at {label}."),
            (false, Some(FieldKind::Dropdown { .. })) => {
                format!("{label} still needs an option picked.")
            }
            (false, _) => format!("{label} is still empty. Drag an answer from the {label} group."),
        };
        Hint { field: Some(key), message }
    }
}
