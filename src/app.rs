//! ADO Card Game App
//!
//! Root component: palette on the left, card on the right.

use leptos::prelude::*;
use reactive_stores::Store;

use ado_card_core::{Campaign, GameEvent};
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::components::{AdoCard, DragPreview, DraggableItemMenu};
use crate::config::AppConfig;
use crate::context::GameContext;
use crate::store::{GameState, GameStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let campaign = Campaign::builtin();
    if let Err(err) = campaign.validate() {
        log::error!("[GAME] {}", err);
    }

    let start_level = if config.start_level < campaign.len() {
        config.start_level
    } else {
        log::warn!("[CONFIG] level {} does not exist, starting at 1", config.start_level + 1);
        0
    };
    let Some(scenario) = campaign.get(start_level).cloned() else {
        return view! { <p class="empty-campaign">"No levels available."</p> }.into_any();
    };

    let store = Store::new(GameState::new(scenario, start_level));
    let dnd = create_dnd_signals();
    let ctx = GameContext::new(store, dnd, campaign, config);
    provide_context(ctx);

    // Every finished drag, including ones released outside any target
    bind_global_mouseup(dnd, move |source, target| {
        ctx.dispatch(GameEvent::Drop(source.released(target)));
    });

    let level_label = move || format!("Level {} of {}", store.level().get() + 1, ctx.level_count());
    let prompt = move || store.session().read().scenario().prompt.clone();

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"ADO Card Game"</h1>
                <Show when=move || !store.finished().get()>
                    <p class="level-label">{level_label}</p>
                    <p class="scenario-prompt">{prompt}</p>
                </Show>
            </header>
            <main>
                <Show
                    when=move || !store.finished().get()
                    fallback=move || view! { <CampaignComplete /> }
                >
                    <div class=move || {
                        if dnd.is_active() { "game-container drag-active" } else { "game-container" }
                    }>
                        <DraggableItemMenu />
                        <AdoCard />
                    </div>
                    <DragPreview />
                </Show>
            </main>
        </div>
    }
    .into_any()
}

/// Shown after proceeding past the last level
#[component]
fn CampaignComplete() -> impl IntoView {
    let ctx = crate::context::use_game();

    view! {
        <div class="campaign-complete">
            <h2>"All cards done!"</h2>
            <p>{move || format!("You filled in all {} work items correctly.", ctx.level_count())}</p>
            <button class="restart-button" on:click=move |_| ctx.restart()>"Play again"</button>
        </div>
    }
}
