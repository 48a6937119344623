use thiserror::Error;

pub type MrResult<T> = Result<T, MrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MrError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: i128,
        len: usize,
    },

    #[error("Value not set: {what}")]
    Unset { what: &'static str },
}
