//! Error types for changeset-core

/// Result type for changeset-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a changeset
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration values that cannot produce a sensible output
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Request arguments that cannot be diffed
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from changeset-fs
    #[error(transparent)]
    Fs(#[from] changeset_fs::Error),

    /// Git error from changeset-git
    #[error(transparent)]
    Git(#[from] changeset_git::Error),
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
