//! Error handling for the team matcher application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}

pub type Result<T> = std::result::Result<T, TeamMatcherError>;
