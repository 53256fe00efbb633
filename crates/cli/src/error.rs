//! Error types for mousekeysctl

use mousekeys_engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] EngineError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument(_) => 2,
            CliError::InvalidConfiguration(EngineError::Io { .. }) => 3,
            CliError::InvalidConfiguration(_) | CliError::JsonError(_) => 4,
        }
    }
}
