//! Error types for civiltime operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Non-progressing step: {0}")]
    NonProgressingStep(String),

    #[error("Nonexistent local time: {0}")]
    NonexistentLocalTime(String),
}

pub type Result<T> = std::result::Result<T, Error>;
