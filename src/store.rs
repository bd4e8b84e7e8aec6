//! Global Game State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use ado_card_core::{Effect, GameEvent, Hint, Scenario, Session};

/// Global game state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct GameState {
    /// Card being played
    pub session: Session,
    /// Index of the current level in the campaign
    pub level: usize,
    /// Set after proceeding past the last level
    pub finished: bool,
    /// Hint currently on screen
    pub hint: Option<Hint>,
    /// Bumped for every hint shown, so stale timers don't hide a newer one
    pub hint_seq: u32,
}

impl GameState {
    pub fn new(scenario: Scenario, level: usize) -> Self {
        Self {
            session: Session::new(scenario),
            level,
            finished: false,
            hint: None,
            hint_seq: 0,
        }
    }
}

/// Type alias for the store
pub type GameStore = Store<GameState>;

// ========================
// Store Helper Functions
// ========================

/// Run one event through the session; returns the effect for the caller
pub fn store_dispatch(store: &GameStore, event: GameEvent) -> Option<Effect> {
    let effect = store.session().write().apply(event);
    if log::log_enabled!(log::Level::Debug) {
        let session = store.session().read_untracked();
        match serde_json::to_string(session.state()) {
            Ok(json) => log::debug!("[GAME] card {}", json),
            Err(err) => log::warn!("[GAME] card snapshot failed: {}", err),
        }
    }
    effect
}

/// Replace the card with a fresh one for `scenario`
pub fn store_start_level(store: &GameStore, scenario: Scenario, level: usize) {
    log::info!("[GAME] level {} ({})", level + 1, scenario.id);
    *store.session().write() = Session::new(scenario);
    *store.level().write() = level;
    *store.finished().write() = false;
    *store.hint().write() = None;
}

/// Mark the whole campaign as done
pub fn store_finish(store: &GameStore) {
    log::info!("[GAME] campaign finished");
    *store.finished().write() = true;
    *store.hint().write() = None;
}

/// Show a hint and return its sequence number
pub fn store_show_hint(store: &GameStore, hint: Hint) -> u32 {
    let seq = store.hint_seq().get_untracked().wrapping_add(1);
    *store.hint_seq().write() = seq;
    *store.hint().write() = Some(hint);
    seq
}

/// Hide the hint if it is still the one numbered `seq`
pub fn store_expire_hint(store: &GameStore, seq: u32) {
    if store.hint_seq().get_untracked() == seq {
        *store.hint().write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ado_card_core::scenarios::login_story;
    use ado_card_core::FieldKey;

    fn hint(field: FieldKey, message: &str) -> Hint {
        Hint { field: Some(field), message: message.to_string() }
    }

    #[test]
    fn test_stale_timer_keeps_newer_hint() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(GameState::new(login_story(), 0));
            let first = store_show_hint(&store, hint(FieldKey::Title, "first"));
            let second = store_show_hint(&store, hint(FieldKey::Priority, "second"));
            assert_ne!(first, second);

            store_expire_hint(&store, first);
            assert_eq!(
                store.hint().get_untracked().map(|hint| hint.message),
                Some("second".to_string())
            );

            store_expire_hint(&store, second);
            assert_eq!(store.hint().get_untracked(), None);
        });
    }

    #[test]
    fn test_new_level_clears_hint() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(GameState::new(login_story(), 0));
            store_show_hint(&store, hint(FieldKey::Title, "look again"));
            store_start_level(&store, login_story(), 1);
            assert_eq!(store.hint().get_untracked(), None);
            assert_eq!(store.level().get_untracked(), 1);
        });
    }
}
