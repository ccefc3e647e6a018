// src/error.rs
use thiserror::Error;

/// Root error type for the tally core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    /// `add_word` received an absent input instead of a string.
    ///
    /// An *empty* string is not an error; it is silently dropped by
    /// normalization. Only the missing-input case raises.
    #[error("invalid argument: word is absent")]
    InvalidArgument,
}

pub type Result<T> = std::result::Result<T, TallyError>;
