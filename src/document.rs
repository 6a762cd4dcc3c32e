use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::VersionTag;
use crate::error::{ChangelogError, Result};
use crate::merge::tags_in_document;

/// The changelog file on disk and whatever it held when the run started.
#[derive(Debug, Clone)]
pub struct ChangelogFile {
    path: PathBuf,
    existing: Option<String>,
}

impl ChangelogFile {
    /// Read the file in full. A missing file is not an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let existing = if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| ChangelogError::file_access(&path, e))?;
            tracing::debug!(path = %path.display(), bytes = content.len(), "read existing changelog");
            Some(content)
        } else {
            tracing::debug!(path = %path.display(), "changelog does not exist yet");
            None
        };

        Ok(ChangelogFile { path, existing })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content read at load time, empty for a missing file
    pub fn content(&self) -> &str {
        self.existing.as_deref().unwrap_or("")
    }

    /// Missing or zero-length
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Release tags already recorded as sections
    pub fn present_tags(&self) -> Vec<VersionTag> {
        tags_in_document(self.content())
    }

    /// The preamble is written for new or empty files, and when regenerating.
    pub fn needs_header(&self, force: bool) -> bool {
        force || self.is_empty()
    }

    /// Replace the file with `content`.
    ///
    /// The content goes to a temporary file next to the target first and is
    /// then renamed over it, so readers never observe a half-written file.
    pub fn write(&self, content: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temp =
            NamedTempFile::new_in(&dir).map_err(|e| ChangelogError::file_access(&self.path, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| ChangelogError::file_access(&self.path, e))?;
        temp.flush()
            .map_err(|e| ChangelogError::file_access(&self.path, e))?;
        temp.persist(&self.path)
            .map_err(|e| ChangelogError::file_access(&self.path, e.error))?;

        tracing::info!(path = %self.path.display(), bytes = content.len(), "changelog written");
        Ok(())
    }
}
