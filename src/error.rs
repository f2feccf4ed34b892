//! Error types for Spis.

use thiserror::Error;

/// Library-level error type for Spis operations.
#[derive(Error, Debug)]
pub enum SpisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Menu fetch failed: {0}")]
    Fetch(String),

    #[error("Recommendation failed: {0}")]
    Recommendation(String),

    #[error("Could not understand the audio")]
    SpeechUnintelligible,

    #[error("Speech service error: {0}")]
    SpeechUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Spis operations.
pub type Result<T> = std::result::Result<T, SpisError>;
