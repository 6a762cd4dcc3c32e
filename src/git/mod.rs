//! Version control access
//!
//! The changelog pipeline only needs two things from the repository: the
//! list of tag names and a bounded, newest-first slice of history rendered
//! as `ref<divisor>subject<divisor>date` records. The [Repository] trait
//! captures exactly that, so the pipeline can run against:
//!
//! - [repository::Git2Repository]: in-process libgit2 via the `git2` crate
//! - [cli::GitCliRepository]: the `git` executable
//! - [mock::MockRepository]: canned data for tests
//!
//! ```rust
//! # use changelog_updater::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> changelog_updater::Result<()> {
//! let tags = repo.list_tags()?;
//! let records = repo.log_records("1.2.0", "###", 200)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod decoration;
pub mod mock;
pub mod repository;

pub use cli::GitCliRepository;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::path::{Path, PathBuf};

use crate::config::VcsBackend;
use crate::error::Result;

/// Repository operations the changelog pipeline depends on
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, in no particular order
    /// * `Err` - If the tags cannot be listed; this is fatal for a run
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Read history starting at `start`, newest first
    ///
    /// Each record is `ref<divisor>subject<divisor>date` where `ref` is the
    /// ref decoration of the commit (e.g. `tag: 1.2.0, main`, often empty),
    /// `subject` the first line of the message and `date` the author date
    /// as `YYYY-MM-DD`.
    ///
    /// # Arguments
    /// * `start` - Revision to start from, usually the newest release tag
    /// * `divisor` - Field separator
    /// * `limit` - Maximum number of records returned
    fn log_records(&self, start: &str, divisor: &str, limit: usize) -> Result<Vec<String>>;

    /// Working directory of the repository, if it has one
    fn workdir(&self) -> Option<PathBuf>;
}

/// Open the repository containing `path` with the configured backend
pub fn open_repository(backend: VcsBackend, path: &Path) -> Result<Box<dyn Repository>> {
    match backend {
        VcsBackend::Git2 => Ok(Box::new(Git2Repository::open(path)?)),
        VcsBackend::Cli => Ok(Box::new(GitCliRepository::new(path))),
    }
}

/// Join the three record fields with the divisor
pub fn format_log_record(r#ref: &str, subject: &str, date: &str, divisor: &str) -> String {
    format!("{}{d}{}{d}{}", r#ref, subject, date, d = divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_record() {
        assert_eq!(
            format_log_record("tag: 1.0.0", "Add login", "2024-01-01", "###"),
            "tag: 1.0.0###Add login###2024-01-01"
        );
        assert_eq!(format_log_record("", "Fix", "2024-01-01", "|"), "|Fix|2024-01-01");
    }
}
