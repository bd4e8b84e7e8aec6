//! Game Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use ado_card_core::{Campaign, DragSource, DroppableId, Effect, GameEvent, Hint};
use leptos_dragdrop::DndSignals;

use crate::config::AppConfig;
use crate::store::{
    store_dispatch, store_expire_hint, store_finish, store_show_hint, store_start_level, GameStateStoreFields, GameStore,
};

/// Drag state for palette candidates over card fields
pub type CardDnd = DndSignals<DragSource, DroppableId>;

/// Game-wide handles provided via context
#[derive(Clone, Copy)]
pub struct GameContext {
    pub store: GameStore,
    pub dnd: CardDnd,
    campaign: StoredValue<Campaign>,
    config: StoredValue<AppConfig>,
}

impl GameContext {
    pub fn new(store: GameStore, dnd: CardDnd, campaign: Campaign, config: AppConfig) -> Self {
        Self {
            store,
            dnd,
            campaign: StoredValue::new(campaign),
            config: StoredValue::new(config),
        }
    }

    pub fn level_count(&self) -> usize {
        self.campaign.with_value(Campaign::len)
    }

    /// Send a user intent to the session and carry out whatever it asks for
    pub fn dispatch(&self, event: GameEvent) {
        match store_dispatch(&self.store, event) {
            Some(Effect::Proceed { scenario_id }) => self.advance(&scenario_id),
            Some(Effect::Hint(hint)) => self.show_hint(hint),
            None => {}
        }
    }

    /// Start over from the first level
    pub fn restart(&self) {
        self.start_level(0);
    }

    fn start_level(&self, index: usize) {
        match self.campaign.with_value(|campaign| campaign.get(index).cloned()) {
            Some(scenario) => store_start_level(&self.store, scenario, index),
            None => log::warn!("[GAME] no level {}", index + 1),
        }
    }

    fn advance(&self, scenario_id: &str) {
        let current = self.store.level().get_untracked();
        log::info!("[GAME] proceeding from {}", scenario_id);
        match self.campaign.with_value(|campaign| campaign.next_after(current)) {
            Some(next) => self.start_level(next),
            None => store_finish(&self.store),
        }
    }

    fn show_hint(&self, hint: Hint) {
        log::debug!("[GAME] hint: {}", hint.message);
        let seq = store_show_hint(&self.store, hint);
        let store = self.store;
        let timeout_ms = self.config.with_value(|config| config.hint_timeout_ms);
        Timeout::new(timeout_ms, move || store_expire_hint(&store, seq)).forget();
    }
}

/// Get the game context
pub fn use_game() -> GameContext {
    expect_context::<GameContext>()
}
