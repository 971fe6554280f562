//! Error types for changeset-git

/// Result type for changeset-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a branch diff
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Revision '{name}' not found")]
    RefNotFound { name: String },

    #[error("Git command failed with exit code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    /// Path resolution failure while opening a repository
    #[error(transparent)]
    Fs(#[from] changeset_fs::Error),

    #[error("Failed to run git: {0}")]
    Io(#[from] std::io::Error),
}
