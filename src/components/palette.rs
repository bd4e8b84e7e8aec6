//! Draggable Item Menu
//!
//! Palette of candidate answers, one collapsible group per droppable field.

use std::collections::BTreeSet;

use leptos::prelude::*;

use ado_card_core::{Candidate, DragSource, DroppableId, FieldKey};
use leptos_dragdrop::{make_on_mousedown, make_on_mouseleave, make_on_target_mouseenter};

use crate::context::use_game;
use crate::store::GameStateStoreFields;

#[component]
pub fn DraggableItemMenu() -> impl IntoView {
    let ctx = use_game();
    let store = ctx.store;

    // Only the first group starts open
    let (open_groups, set_open_groups) = signal(BTreeSet::from([FieldKey::Title]));

    let groups = move || {
        store
            .session()
            .read()
            .scenario()
            .catalog()
            .groups()
            .map(|(key, candidates)| (key, candidates.to_vec()))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="draggable-item-menu">
            <For
                each=groups
                key=|(key, candidates)| (*key, candidates.clone())
                children=move |(key, candidates)| {
                    let is_open = move || open_groups.with(|open| open.contains(&key));
                    let toggle = move |_| {
                        set_open_groups.update(|open| {
                            if !open.remove(&key) {
                                open.insert(key);
                            }
                        });
                    };
                    view! {
                        <div class="menu-group">
                            <div class="field-toggle" on:click=toggle>
                                {key.label()}
                                <span class="toggle-arrow">{move || if is_open() { "▼" } else { "▶" }}</span>
                            </div>
                            <PaletteGroup field=key candidates=candidates is_open=Signal::derive(is_open) />
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Candidates of one group; also a drop target so releases over the palette
/// are reported as palette drops rather than cancellations
#[component]
fn PaletteGroup(field: FieldKey, candidates: Vec<Candidate>, is_open: Signal<bool>) -> impl IntoView {
    let dnd = use_game().dnd;
    let group = DroppableId::Palette(field);

    view! {
        <div
            class=move || if is_open.get() { "answer-list open" } else { "answer-list" }
            on:mouseenter=make_on_target_mouseenter(dnd, group)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            {candidates
                .into_iter()
                .enumerate()
                .map(|(index, candidate)| {
                    let source = DragSource::palette(field, index);
                    let style = candidate
                        .color()
                        .map(|color| format!("border-left: 4px solid {color};"))
                        .unwrap_or_default();
                    let class = move || {
                        if dnd.is_dragging(&source) { "menu-item dragging" } else { "menu-item" }
                    };
                    view! {
                        <div class=class style=style on:mousedown=make_on_mousedown(dnd, source)>
                            {candidate.value().to_string()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
