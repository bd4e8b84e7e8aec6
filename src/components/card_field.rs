//! Card Field Component
//!
//! One slot on the card. The field descriptor decides whether it renders as
//! a drop target or as a dropdown.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use ado_card_core::{DragSource, DroppableId, FieldDescriptor, FieldKey, FieldKind, GameEvent};
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter_filtered};

use crate::context::use_game;
use crate::store::GameStateStoreFields;

/// What a field renders as, with everything the widget needs
#[derive(Debug, Clone, PartialEq)]
enum FieldSlot {
    Droppable { placeholder: String },
    Dropdown { placeholder: String, options: Vec<String> },
}

impl From<FieldDescriptor> for FieldSlot {
    fn from(descriptor: FieldDescriptor) -> Self {
        let placeholder = descriptor.placeholder();
        match descriptor.kind {
            FieldKind::Droppable { .. } => FieldSlot::Droppable { placeholder },
            FieldKind::Dropdown { options } => FieldSlot::Dropdown { placeholder, options },
        }
    }
}

#[component]
pub fn CardField(field: FieldKey) -> impl IntoView {
    let store = use_game().store;

    // Re-rendered only when the descriptor itself changes (new level)
    let descriptor = Memo::new(move |_| store.session().read().scenario().field(field).cloned());

    move || match descriptor.get().map(FieldSlot::from) {
        Some(FieldSlot::Droppable { placeholder }) => view! {
            <DroppableField field=field placeholder=placeholder />
        }
        .into_any(),
        Some(FieldSlot::Dropdown { placeholder, options }) => view! {
            <DropdownField field=field placeholder=placeholder options=options />
        }
        .into_any(),
        None => view! { <div class="field missing"></div> }.into_any(),
    }
}

/// Filled by dropping a candidate of the same group; click clears it
#[component]
fn DroppableField(field: FieldKey, placeholder: String) -> impl IntoView {
    let ctx = use_game();
    let store = ctx.store;
    let dnd = ctx.dnd;
    let target = DroppableId::Field(field);

    let value = move || store.session().read().value(field).to_string();
    let is_correct = move || store.session().read().field_correct(field);

    // Candidates only land on the field of their own group
    let on_mouseenter = make_on_target_mouseenter_filtered(dnd, target, move |source: &DragSource| {
        source.group == DroppableId::Palette(field)
    });

    let on_click = move |_| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.dispatch(GameEvent::ClickField(field));
    };

    view! {
        <div
            class=move || {
                let mut c = format!("field {}", field.css_class());
                if dnd.is_over(&target) { c.push_str(" dragging-over"); }
                c
            }
            on:mouseenter=on_mouseenter
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <div
                class=move || if is_correct() { "field-value correct" } else { "field-value" }
                on:click=on_click
            >
                {move || {
                    let current = value();
                    if current.is_empty() { placeholder.clone() } else { current }
                }}
            </div>
        </div>
    }
}

/// Filled by picking an option
#[component]
fn DropdownField(field: FieldKey, placeholder: String, options: Vec<String>) -> impl IntoView {
    let ctx = use_game();
    let store = ctx.store;

    let value = move || store.session().read().value(field).to_string();
    let is_correct = move || store.session().read().field_correct(field);

    let on_change = move |ev: web_sys::Event| {
        let Some(select) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) else {
            return;
        };
        let picked = select.value();
        let value = (!picked.is_empty()).then_some(picked);
        ctx.dispatch(GameEvent::Select { key: field, value });
    };

    view! {
        <select
            class=move || if is_correct() { "field-dropdown correct" } else { "field-dropdown" }
            prop:value=value
            on:change=on_change
        >
            <option value="" selected=move || value().is_empty()>{placeholder}</option>
            {options
                .into_iter()
                .map(|option| {
                    let label = option.clone();
                    let is_selected = {
                        let option = option.clone();
                        move || value() == option
                    };
                    view! { <option value=option selected=is_selected>{label}</option> }
                })
                .collect_view()}
        </select>
    }
}
