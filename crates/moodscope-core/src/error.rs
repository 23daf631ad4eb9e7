//! Error types for the Moodscope system.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Insufficient data: need {required} entries, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid entry date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}
