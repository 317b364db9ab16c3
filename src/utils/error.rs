use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Document store request failed with status {status}: {detail}")]
    StoreError { status: u16, detail: String },

    #[error("Credential lookup failed: {message}")]
    AuthError { message: String },
}

pub type Result<T> = std::result::Result<T, CleanupError>;
