//! UI Components
//!
//! Leptos components for the palette and the card.

mod card;
mod card_field;
mod drag_preview;
mod palette;

pub use card::AdoCard;
pub use card_field::CardField;
pub use drag_preview::DragPreview;
pub use palette::DraggableItemMenu;
