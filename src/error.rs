use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for changelog-updater operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Version control unavailable: {0}")]
    VcsUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot access changelog file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience type alias for Results in changelog-updater
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a VCS error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        ChangelogError::VcsUnavailable(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Wrap an I/O failure on the changelog file
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChangelogError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
