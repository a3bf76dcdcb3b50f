use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Simulation cancelled before completion")]
    Cancelled,

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for ScoringError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ScoringError::Deserialization(err.to_string())
        } else {
            ScoringError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
