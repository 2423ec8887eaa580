//! Error types for Postdeck

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostdeckError>;

#[derive(Error, Debug)]
pub enum PostdeckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl PostdeckError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PostdeckError::InvalidInput(_) => 3,
            PostdeckError::Storage(StorageError::Corrupt(_)) => 2,
            PostdeckError::Storage(_) => 1,
            PostdeckError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored payload is not a valid post collection: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to serialize post collection: {0}")]
    Encode(#[source] serde_json::Error),
}
