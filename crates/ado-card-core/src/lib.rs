//! ADO Card Game Core
//!
//! Game logic with no browser dependencies:
//! - field: the slots on a card and how each is filled
//! - catalog: palette candidates and the answer key
//! - scenario / scenarios: puzzles and the compiled-in levels
//! - state: current card values
//! - dnd: turning finished drags into card updates
//! - session: one scenario in play, completion and proceed gating
//! - hint: hint providers

pub mod catalog;
pub mod dnd;
pub mod error;
pub mod field;
pub mod hint;
pub mod scenario;
pub mod scenarios;
pub mod session;
pub mod state;

mod tests;

pub use catalog::{AnswerCatalog, Candidate, CorrectAnswers};
pub use dnd::{
    apply_drop, reduce_drop, resolve_drop, DragSource, DropEvent, DropRejection, DroppableId,
    Placement,
};
pub use error::{Error, Result};
pub use field::{FieldDescriptor, FieldKey, FieldKind};
pub use hint::{Hint, HintProvider, NextFieldHint};
pub use scenario::{Campaign, Scenario};
pub use session::{Effect, GameEvent, GameHooks, Session};
pub use state::CardState;
