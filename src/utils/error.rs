use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolboxError {
    #[error("Candidate pool is exhausted, no one left to draw")]
    PoolExhausted,

    #[error("Roster is empty")]
    EmptyRoster,

    #[error("Group size must be at least 2, got {size}")]
    InvalidGroupSize { size: usize },

    #[error("A draw is already in progress")]
    DrawInProgress,

    #[error("No draw in progress to settle")]
    NoPendingDraw,

    #[error("Operation only allowed while idle (current state: {state})")]
    NotIdle { state: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ToolboxError>;
