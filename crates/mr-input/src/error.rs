//! Error types for the input container.

use mr_core::MrError;
use thiserror::Error;

use crate::record::RecordKind;

/// Errors raised while reading records back out of the container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{kind} index out of range (error {code}): index={index}, len={len}", code = .kind.out_of_range_code())]
    OutOfRange {
        kind: RecordKind,
        index: i128,
        len: usize,
    },
}

impl InputError {
    /// Numbered diagnostic code, distinct per record collection.
    pub fn code(&self) -> u32 {
        match self {
            InputError::OutOfRange { kind, .. } => kind.out_of_range_code(),
        }
    }

    /// The collection that was misindexed.
    pub fn kind(&self) -> RecordKind {
        match self {
            InputError::OutOfRange { kind, .. } => *kind,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;

impl From<InputError> for MrError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::OutOfRange { kind, index, len } => MrError::IndexOob {
                what: kind.label(),
                index,
                len,
            },
        }
    }
}
