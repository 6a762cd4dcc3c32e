use crate::error::{ChangelogError, Result};
use crate::git::decoration::Decoration;
use crate::git::format_log_record;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{Oid, ReferenceType, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Map every decorated commit to its tags and branch names
    fn decorations(&self) -> Result<HashMap<Oid, Decoration>> {
        let mut decorations: HashMap<Oid, Decoration> = HashMap::new();

        for reference in self.repo.references()? {
            let reference = reference?;

            // HEAD and origin/HEAD style aliases
            if reference.kind() == Some(ReferenceType::Symbolic) {
                continue;
            }

            let Some(name) = reference.shorthand().map(str::to_string) else {
                continue;
            };
            let Ok(commit) = reference.peel_to_commit() else {
                continue;
            };

            let decoration = decorations.entry(commit.id()).or_default();
            if reference.is_tag() {
                decoration.tags.push(name);
            } else if reference.is_branch() || reference.is_remote() {
                decoration.branches.push(name);
            }
        }

        Ok(decorations)
    }
}

/// Author date as `YYYY-MM-DD` in the author's own timezone
fn short_date(seconds: i64, offset_minutes: i32) -> String {
    let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap_or_else(|| Utc.fix());

    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&offset).format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| ChangelogError::vcs(format!("Cannot list tags: {}", e)))?;

        Ok(tags.iter().flatten().map(|name| name.to_string()).collect())
    }

    fn log_records(&self, start: &str, divisor: &str, limit: usize) -> Result<Vec<String>> {
        let start_commit = self
            .repo
            .revparse_single(start)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| ChangelogError::vcs(format!("Cannot resolve '{}': {}", start, e)))?;

        let mut decorations = self.decorations()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(start_commit.id())?;

        let mut records = Vec::new();

        for oid_result in revwalk.take(limit) {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let decoration = decorations
                .remove(&oid)
                .map(Decoration::render)
                .unwrap_or_default();
            let subject = commit.summary().unwrap_or("");
            let when = commit.author().when();
            let date = short_date(when.seconds(), when.offset_minutes());

            records.push(format_log_record(&decoration, subject, &date, divisor));
        }

        tracing::debug!(start, count = records.len(), "read history");
        Ok(records)
    }

    fn workdir(&self) -> Option<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf)
    }
}
