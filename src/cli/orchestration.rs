//! Main workflow orchestration logic
//!
//! This module contains the changelog update workflow, kept apart from
//! argument parsing in main.rs so it can be driven programmatically (and
//! against a mock repository in tests).

use std::path::{Path, PathBuf};

use crate::boundary::{assemble, StartMarker};
use crate::classifier::Classifier;
use crate::config::Config;
use crate::document::ChangelogFile;
use crate::domain::{valid_version_tags, LogEntry, VersionTag};
use crate::error::Result;
use crate::git::Repository;
use crate::merge::merge_into_document;
use crate::warning::ChangelogWarning;

/// Options of one changelog run
///
/// Built once from the CLI arguments and passed down explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogWorkflowArgs {
    /// Changelog file to update
    pub output_path: PathBuf,

    /// Regenerate every tag section and overwrite the file instead of merging
    pub force: bool,

    /// Build the document but leave the file untouched
    pub dry_run: bool,
}

/// Outcome of a changelog run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub output_path: PathBuf,

    /// Tags that received a new section, newest first
    pub sections: Vec<VersionTag>,

    /// The complete document after the run
    pub content: String,

    /// Whether the file was (re)written
    pub written: bool,

    pub warnings: Vec<ChangelogWarning>,
}

/// Default changelog location: `document.file_name` in the repository's
/// working directory, or in the current directory for bare repositories.
pub fn default_output_path<R: Repository + ?Sized>(repo: &R, config: &Config) -> PathBuf {
    repo.workdir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(&config.document.file_name)
}

/// Split raw history lines, skipping (and reporting) malformed ones
fn parse_records(
    records: &[String],
    divisor: &str,
    warnings: &mut Vec<ChangelogWarning>,
) -> Vec<LogEntry> {
    records
        .iter()
        .filter_map(|line| {
            let entry = LogEntry::parse(line, divisor);
            if entry.is_none() {
                tracing::debug!(%line, "malformed history record");
                warnings.push(ChangelogWarning::MalformedLogRecord {
                    line: line.clone(),
                    divisor: divisor.to_string(),
                });
            }
            entry
        })
        .collect()
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Changelog update workflow
///
/// 1. List the repository tags and keep the release-shaped ones
/// 2. Read up to `history.limit` records starting at the newest release tag
/// 3. Load the existing changelog and the tags it already records
/// 4. Walk the history, rendering a section for every new tag
/// 5. Merge the sections into the document (or overwrite in force mode)
/// 6. Write the file unless nothing changed or `dry_run` is set
///
/// # Returns
///
/// The resulting document and run summary, or the first fatal error
/// (tag listing, history reading, file access). The file is only touched
/// in the last step.
pub fn run_changelog_workflow<R: Repository + ?Sized>(
    repo: &R,
    args: &ChangelogWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();

    let tag_names = repo.list_tags()?;
    let valid_tags = valid_version_tags(&tag_names);
    tracing::debug!(total = tag_names.len(), valid = valid_tags.len(), "listed tags");

    let Some(newest) = valid_tags.first() else {
        warnings.push(ChangelogWarning::NoVersionTags {
            tag_count: tag_names.len(),
        });
        return Ok(WorkflowResult {
            output_path: args.output_path.clone(),
            sections: Vec::new(),
            content: String::new(),
            written: false,
            warnings,
        });
    };

    let divisor = config.history.divisor.as_str();
    let records = repo.log_records(newest.as_str(), divisor, config.history.limit)?;
    let entries = parse_records(&records, divisor, &mut warnings);

    let document = ChangelogFile::load(&args.output_path)?;
    let present_tags = document.present_tags();

    let classifier = Classifier::new(&config.keywords);
    let start_marker = StartMarker::new(
        config.document.start_marker_tag.as_str(),
        config.document.start_marker_note.as_str(),
    );
    let assembly = assemble(&entries, &classifier, &present_tags, args.force, start_marker);

    let mut new_content = if document.needs_header(args.force) {
        config.document.header.clone()
    } else {
        String::new()
    };
    new_content.push_str(&assembly.body);

    let content = if args.force {
        new_content
    } else {
        merge_into_document(document.content(), &new_content)
    };

    let unchanged = content == document.content();
    if unchanged {
        warnings.push(ChangelogWarning::AlreadyUpToDate {
            path: display_path(document.path()),
        });
    }

    let written = if args.dry_run || unchanged {
        false
    } else {
        document.write(&content)?;
        true
    };

    tracing::info!(
        sections = assembly.sections.len(),
        written,
        dry_run = args.dry_run,
        "changelog run finished"
    );

    Ok(WorkflowResult {
        output_path: args.output_path.clone(),
        sections: assembly.sections,
        content,
        written,
        warnings,
    })
}
