//! Core error types

use thiserror::Error;

use crate::field::FieldKey;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid droppable id: {0:?}")]
    InvalidDroppableId(String),

    #[error("scenario {scenario}: field {key} has no descriptor")]
    MissingField { scenario: String, key: FieldKey },

    #[error("scenario {scenario}: field {key} is described more than once")]
    DuplicateField { scenario: String, key: FieldKey },

    #[error("scenario {scenario}: droppable field {key} has no candidates")]
    EmptyPalette { scenario: String, key: FieldKey },

    #[error("scenario {scenario}: correct answer for {key} ({answer:?}) cannot be produced")]
    UnreachableAnswer { scenario: String, key: FieldKey, answer: String },
}
