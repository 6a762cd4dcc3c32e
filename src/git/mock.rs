use crate::error::{ChangelogError, Result};
use crate::git::{format_log_record, Repository};
use std::cell::RefCell;
use std::path::PathBuf;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<String>,
    records: Vec<String>,
    workdir: Option<PathBuf>,
    tags_unavailable: bool,
    requests: RefCell<Vec<(String, String, usize)>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            records: Vec::new(),
            workdir: None,
            tags_unavailable: false,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Add a tag name
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Append a raw history record (newest first)
    pub fn add_record(&mut self, record: impl Into<String>) {
        self.records.push(record.into());
    }

    /// Append a history record built from its fields with the `###` divisor
    pub fn add_commit(&mut self, r#ref: &str, subject: &str, date: &str) {
        self.records
            .push(format_log_record(r#ref, subject, date, "###"));
    }

    pub fn set_workdir(&mut self, dir: impl Into<PathBuf>) {
        self.workdir = Some(dir.into());
    }

    /// Make `list_tags` fail like a broken git installation
    pub fn fail_tag_listing(&mut self) {
        self.tags_unavailable = true;
    }

    /// `(start, divisor, limit)` of every `log_records` call
    pub fn log_requests(&self) -> Vec<(String, String, usize)> {
        self.requests.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.tags_unavailable {
            return Err(ChangelogError::vcs("git tag failed"));
        }
        Ok(self.tags.clone())
    }

    fn log_records(&self, start: &str, divisor: &str, limit: usize) -> Result<Vec<String>> {
        self.requests
            .borrow_mut()
            .push((start.to_string(), divisor.to_string(), limit));
        Ok(self.records.iter().take(limit).cloned().collect())
    }

    fn workdir(&self) -> Option<PathBuf> {
        self.workdir.clone()
    }
}
