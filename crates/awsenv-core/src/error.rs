//! Error types for credentials file operations

use thiserror::Error;

/// Errors that can occur while locating or loading a credentials file
#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("Unable to load credentials file from {path}")]
    NotFound { path: String },

    #[error("Failed to read credentials file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse credentials file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to determine home directory")]
    HomeDirUnavailable,
}

/// Result type for credentials operations
pub type Result<T> = std::result::Result<T, CredentialsError>;

impl CredentialsError {
    /// Returns true if the credentials file does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CredentialsError::NotFound { .. })
    }

    /// Path of the file the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            CredentialsError::NotFound { path }
            | CredentialsError::Read { path, .. }
            | CredentialsError::Parse { path, .. } => Some(path.as_str()),
            CredentialsError::HomeDirUnavailable => None,
        }
    }
}
