//! Game Session
//!
//! Owns the card for one scenario and keeps the completion flag in step with
//! it. Every change goes through [`Session::apply`], which recomputes
//! completion before returning.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dnd::{apply_drop, DropEvent};
use crate::field::FieldKey;
use crate::hint::{Hint, HintProvider, NextFieldHint};
use crate::scenario::Scenario;
use crate::state::CardState;

/// User intent reported by the rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Drop(DropEvent),
    /// Dropdown change; `None` or `""` clears the field
    Select { key: FieldKey, value: Option<String> },
    /// Click on a field; clears it when it holds a value
    ClickField(FieldKey),
    Hint,
    Proceed,
}

/// Something the session asks the outside world to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Effect {
    Proceed { scenario_id: String },
    Hint(Hint),
}

/// Receivers for effects
pub trait GameHooks {
    fn on_proceed(&mut self, scenario: &Scenario);

    fn on_hint(&mut self, _hint: &Hint) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    scenario: Scenario,
    state: CardState,
    all_correct: bool,
    /// Set the first time the card is complete, never reset
    solved_once: bool,
}

impl Session {
    pub fn new(scenario: Scenario) -> Self {
        let state = CardState::for_answers(scenario.correct());
        let mut session = Self { scenario, state, all_correct: false, solved_once: false };
        session.recompute_completion();
        session
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.state.get(key)
    }

    pub fn all_correct(&self) -> bool {
        self.all_correct
    }

    /// Drives the "Good Job!" message
    pub fn solved_once(&self) -> bool {
        self.solved_once
    }

    /// For highlighting only; never gates anything
    pub fn field_correct(&self, key: FieldKey) -> bool {
        self.state.field_correct(self.scenario.correct(), key)
    }

    pub fn set_field(&mut self, key: FieldKey, value: Option<&str>) {
        self.state.set_field(key, value);
        self.recompute_completion();
    }

    /// Click-to-clear: a filled field is emptied, an empty one is left alone
    pub fn clear_field(&mut self, key: FieldKey) {
        if self.state.is_set(key) {
            self.state.clear_field(key);
            self.recompute_completion();
        }
    }

    pub fn on_drop(&mut self, event: &DropEvent) {
        if apply_drop(&mut self.state, self.scenario.catalog(), event).is_some() {
            self.recompute_completion();
        }
    }

    pub fn recompute_completion(&mut self) {
        let all_correct = self.state.all_correct(self.scenario.correct());
        if all_correct != self.all_correct {
            debug!("[GAME] {}: all correct = {}", self.scenario.id, all_correct);
        }
        self.all_correct = all_correct;
        if all_correct && !self.solved_once {
            info!("[GAME] {} solved", self.scenario.id);
            self.solved_once = true;
        }
    }

    /// `None` unless every field is correct
    pub fn proceed(&self) -> Option<Effect> {
        if !self.all_correct {
            debug!("[GAME] proceed ignored, card incomplete");
            return None;
        }
        Some(Effect::Proceed { scenario_id: self.scenario.id.clone() })
    }

    pub fn hint_with(&self, provider: &impl HintProvider) -> Hint {
        provider.hint(&self.scenario, &self.state)
    }

    pub fn apply(&mut self, event: GameEvent) -> Option<Effect> {
        self.apply_with(event, &NextFieldHint)
    }

    pub fn apply_with(&mut self, event: GameEvent, hints: &impl HintProvider) -> Option<Effect> {
        match event {
            GameEvent::Drop(drop) => {
                self.on_drop(&drop);
                None
            }
            GameEvent::Select { key, value } => {
                self.set_field(key, value.as_deref());
                None
            }
            GameEvent::ClickField(key) => {
                self.clear_field(key);
                None
            }
            GameEvent::Hint => Some(Effect::Hint(self.hint_with(hints))),
            GameEvent::Proceed => self.proceed(),
        }
    }

    /// Pure form of [`Session::apply`]
    #[must_use]
    pub fn reduce(mut self, event: GameEvent) -> (Self, Option<Effect>) {
        let effect = self.apply(event);
        (self, effect)
    }

    /// Apply `event` and hand any effect to `hooks`
    pub fn dispatch(&mut self, event: GameEvent, hooks: &mut impl GameHooks) {
        match self.apply(event) {
            Some(Effect::Proceed { .. }) => hooks.on_proceed(&self.scenario),
            Some(Effect::Hint(hint)) => hooks.on_hint(&hint),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::login_story;

    fn fill_correct(session: &mut Session) {
        let answers: Vec<_> = session
            .scenario()
            .correct()
            .iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();
        for (key, value) in answers {
            session.set_field(key, Some(&value));
        }
    }

    #[test]
    fn test_new_session_is_incomplete() {
        let session = Session::new(login_story());
        assert!(!session.all_correct());
        assert!(!session.solved_once());
        assert_eq!(session.proceed(), None);
    }

    #[test]
    fn test_completion_flips_both_ways() {
        let mut session = Session::new(login_story());
        fill_correct(&mut session);
        assert!(session.all_correct());

        session.apply(GameEvent::Select { key: FieldKey::Area, value: Some("Backend".into()) });
        assert!(!session.all_correct());
        assert!(session.solved_once());

        session.apply(GameEvent::Select { key: FieldKey::Area, value: Some("Frontend".into()) });
        assert!(session.all_correct());
    }

    #[test]
    fn test_select_without_value_clears() {
        let mut session = Session::new(login_story());
        session.apply(GameEvent::Select { key: FieldKey::State, value: Some("New".into()) });
        assert_eq!(session.value(FieldKey::State), "New");
        session.apply(GameEvent::Select { key: FieldKey::State, value: None });
        assert_eq!(session.value(FieldKey::State), "");
    }

    #[test]
    fn test_click_clears_filled_field_only() {
        let mut session = Session::new(login_story());
        session.apply(GameEvent::ClickField(FieldKey::Title));
        assert_eq!(session.value(FieldKey::Title), "");

        let title = DropEvent::palette_to_field(FieldKey::Title, 0, FieldKey::Title);
        session.apply(GameEvent::Drop(title));
        assert!(session.field_correct(FieldKey::Title));
        session.apply(GameEvent::ClickField(FieldKey::Title));
        assert_eq!(session.value(FieldKey::Title), "");
        assert!(!session.field_correct(FieldKey::Title));
    }

    #[test]
    fn test_hint_leaves_card_alone() {
        let mut session = Session::new(login_story());
        let before = session.state().clone();
        let effect = session.apply(GameEvent::Hint);
        assert!(matches!(effect, Some(Effect::Hint(Hint { field: Some(FieldKey::Title), .. }))));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_reduce_is_pure() {
        let session = Session::new(login_story());
        let parent = DropEvent::palette_to_field(FieldKey::Parent, 0, FieldKey::Parent);
        let (next, effect) = session.clone().reduce(GameEvent::Drop(parent));
        assert_eq!(effect, None);
        assert_eq!(session.value(FieldKey::Parent), "");
        assert_eq!(next.value(FieldKey::Parent), "User Authentication Epic");
    }
}
