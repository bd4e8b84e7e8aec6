//! Drag Preview
//!
//! Floating copy of the dragged candidate that follows the pointer.

use leptos::prelude::*;

use ado_card_core::{DroppableId, FieldKey};

use crate::context::use_game;
use crate::store::GameStateStoreFields;

/// Offset from the pointer so the preview doesn't sit under the cursor
const PREVIEW_OFFSET_PX: i32 = 12;

#[component]
pub fn DragPreview() -> impl IntoView {
    let ctx = use_game();
    let store = ctx.store;
    let dnd = ctx.dnd;

    let text = move || {
        let source = dnd.dragging_read.get()?;
        let DroppableId::Palette(group) = source.group else {
            return None;
        };
        let session = store.session().read();
        session
            .scenario()
            .catalog()
            .candidate(group, source.index)
            .map(|candidate| (group, candidate.value().to_string()))
    };

    move || {
        text().map(|(group, text): (FieldKey, String)| {
            let (x, y) = dnd.pointer_read.get();
            view! {
                <div
                    class=format!("drag-preview {}", group.css_class())
                    style=format!("left: {}px; top: {}px;", x + PREVIEW_OFFSET_PX, y + PREVIEW_OFFSET_PX)
                >
                    {text}
                </div>
            }
        })
    }
}
