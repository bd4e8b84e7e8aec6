//! ADO Card Component
//!
//! The work-item form: header, two columns of fields and the footer with
//! the hint and proceed buttons.

use leptos::prelude::*;

use ado_card_core::{FieldKey, GameEvent};

use crate::components::CardField;
use crate::context::use_game;
use crate::store::GameStateStoreFields;

/// Field with its label above it
#[component]
fn LabeledField(field: FieldKey, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div class=class>
            <label>{format!("{}:", field.label())}</label>
            <CardField field=field />
        </div>
    }
}

#[component]
pub fn AdoCard() -> impl IntoView {
    let store = use_game().store;

    let header = move || {
        let session = store.session().read();
        let scenario = session.scenario();
        (scenario.icon.clone(), format!("{} {}", scenario.work_item_type, scenario.card_id))
    };

    view! {
        <div class="ado-card">
            <div class="card-header">
                <div class="card-icon-id">
                    <span class="card-icon">{move || header().0}</span>
                    <span class="card-type-id">{move || header().1}</span>
                </div>
            </div>
            <div class="card-content">
                <div class="left-column">
                    <div class="title-section">
                        <CardField field=FieldKey::Title />
                    </div>
                    <div class="assigned-section">
                        <LabeledField field=FieldKey::AssignedTo class="assigned-to-column" />
                        <LabeledField field=FieldKey::Labels class="labels-column" />
                    </div>
                    <div class="details-section">
                        <div class="details-row">
                            <LabeledField field=FieldKey::State class="details-field" />
                            <LabeledField field=FieldKey::Area class="details-field" />
                        </div>
                        <div class="details-row">
                            <LabeledField field=FieldKey::Reason class="details-field" />
                            <LabeledField field=FieldKey::Iteration class="details-field" />
                        </div>
                    </div>
                    <LabeledField field=FieldKey::Description class="description-field" />
                    <LabeledField field=FieldKey::AcceptanceCriteria class="acceptance-criteria-field" />
                </div>
                <div class="right-column">
                    <div class="planning-info">
                        <LabeledField field=FieldKey::StoryPoints class="planning-field" />
                        <LabeledField field=FieldKey::Priority class="planning-field" />
                    </div>
                    <div class="related-work">
                        <h3>"Related Work"</h3>
                        <LabeledField field=FieldKey::Parent class="related-work-item" />
                        <LabeledField field=FieldKey::Related class="related-work-item" />
                    </div>
                </div>
            </div>
            <CardFooter />
        </div>
    }
}

/// Completion message, hint toast and the two action buttons
#[component]
fn CardFooter() -> impl IntoView {
    let ctx = use_game();
    let store = ctx.store;

    let all_correct = move || store.session().read().all_correct();
    let solved_once = move || store.session().read().solved_once();
    let hint = move || store.hint().get().map(|hint| hint.message);

    view! {
        <div class="card-bottom">
            <div class="card-message">
                <Show when=solved_once>"Good Job!"</Show>
                {move || hint().map(|message| view! { <span class="hint-message">{message}</span> })}
            </div>
            <div class="card-buttons">
                <button class="hint-button" on:click=move |_| ctx.dispatch(GameEvent::Hint)>
                    "Hint"
                </button>
                <button
                    class=move || if all_correct() { "proceed-button active" } else { "proceed-button" }
                    disabled=move || !all_correct()
                    on:click=move |_| ctx.dispatch(GameEvent::Proceed)
                >
                    "Proceed"
                </button>
            </div>
        </div>
    }
}
