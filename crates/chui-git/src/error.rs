//! Error types for chui-git

use std::path::PathBuf;

/// Result type for chui-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chui-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] chui_fs::Error),

    #[error("Failed to clone {url}: {message}")]
    Clone { url: String, message: String },

    #[error("Revision '{revision}' not found in {url}")]
    RevisionNotFound { url: String, revision: String },

    #[error("Destination {path} already exists and is not empty")]
    DestinationExists { path: PathBuf },
}
