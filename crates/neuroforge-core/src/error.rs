use thiserror::Error;

/// Core error type for NeuroForge operations.
#[derive(Error, Debug)]
pub enum NeuroForgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stage '{stage}' failed: {message}")]
    Stage { stage: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NeuroForgeError {
    /// Build a stage failure from any displayable error.
    pub fn stage(stage: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Stage {
            stage: stage.into(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NeuroForgeError {
    fn from(e: toml::de::Error) -> Self {
        NeuroForgeError::Config(format!("Failed to parse config: {}", e))
    }
}

/// Result type alias using NeuroForgeError.
pub type Result<T> = std::result::Result<T, NeuroForgeError>;
