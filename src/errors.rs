use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtpmError {
    #[error("Package manager session is not available (offline)")]
    SessionUnavailable,

    #[error("Delegated action `{action}` failed with status {code}")]
    ActionFailed { action: &'static str, code: i32 },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Insufficient permissions: `{0}` is not writable")]
    PermissionError(PathBuf),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

impl ExtpmError {
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::NetworkError(msg.into())
    }

    /// Maps a delegated action's exit status onto a result without
    /// reinterpreting the engine's status-code semantics.
    pub fn from_status(action: &'static str, code: i32) -> Result<(), Self> {
        if code == 0 {
            Ok(())
        } else {
            Err(Self::ActionFailed { action, code })
        }
    }
}
