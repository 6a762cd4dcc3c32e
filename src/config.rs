use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Represents the complete configuration for changelog-updater.
///
/// Contains the classification keywords, history reading options and the
/// fixed texts written into the changelog document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub document: DocumentConfig,
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Returns the default merge keywords.
fn default_merge_keywords() -> Vec<String> {
    to_strings(&["merge"])
}

/// Returns the default addition keywords (English and Portuguese).
fn default_added_keywords() -> Vec<String> {
    to_strings(&[
        "add",
        "added",
        "new",
        "create",
        "adicionado",
        "novo",
        "criado",
    ])
}

/// Returns the default removal keywords (English and Portuguese).
fn default_removed_keywords() -> Vec<String> {
    to_strings(&[
        "remove", "removed", "delete", "deletar", "remover", "deletado", "removido",
    ])
}

/// Returns the default fix keywords (English and Portuguese).
fn default_fixed_keywords() -> Vec<String> {
    to_strings(&[
        "hotfix",
        "bugfix",
        "corrected",
        "fix",
        "fixed",
        "fixes",
        "bug",
        "problem",
        "problema",
        "error",
        "errors",
        "erro",
        "erros",
        "arrumado",
        "corrigido",
        "corrigir",
        "arrumar",
        "consertar",
        "consertado",
    ])
}

/// Keyword lists used to classify commit subjects.
///
/// Matching is case-insensitive substring containment. Categories are
/// checked in the order merges, added, removed, fixed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct KeywordsConfig {
    #[serde(default = "default_merge_keywords")]
    pub merges: Vec<String>,

    #[serde(default = "default_added_keywords")]
    pub added: Vec<String>,

    #[serde(default = "default_removed_keywords")]
    pub removed: Vec<String>,

    #[serde(default = "default_fixed_keywords")]
    pub fixed: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        KeywordsConfig {
            merges: default_merge_keywords(),
            added: default_added_keywords(),
            removed: default_removed_keywords(),
            fixed: default_fixed_keywords(),
        }
    }
}

/// Which implementation reads tags and history.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VcsBackend {
    /// In-process libgit2
    #[default]
    Git2,
    /// The `git` executable found on PATH
    Cli,
}

fn default_divisor() -> String {
    "###".to_string()
}

fn default_history_limit() -> usize {
    200
}

/// Configuration for reading commit history.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HistoryConfig {
    /// Token separating ref, subject and date in a log record
    #[serde(default = "default_divisor")]
    pub divisor: String,

    /// Maximum number of commits read, newest first
    #[serde(default = "default_history_limit")]
    pub limit: usize,

    #[serde(default)]
    pub backend: VcsBackend,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            divisor: default_divisor(),
            limit: default_history_limit(),
            backend: VcsBackend::default(),
        }
    }
}

fn default_file_name() -> String {
    "CHANGELOG.md".to_string()
}

fn default_header() -> String {
    r#"
# Changelog

This changelog format is based on [Keep a Changelog](https://keepachangelog.com/).

The versioning pattern is defined by MAJOR.MINOR.PATCH-[alpha,beta,rc]

- example: 0.1.1-beta

Meaning of:

- alpha -> tag for branch test releases
- beta -> tag for field test releases
- rc -> tag for release candidate releases

You can read more about version pattern on [this page](https://jassyapollo.atlassian.net/wiki/spaces/PA/pages/595886975/Nomenclatura+de+vers+es+de+Software+Firmware).

"#
    .to_string()
}

fn default_start_marker_tag() -> String {
    "0.0.1-beta".to_string()
}

fn default_start_marker_note() -> String {
    "Start of J.Assy versioning system".to_string()
}

/// Fixed texts of the changelog document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocumentConfig {
    /// File name used when no output path is given
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Preamble written when the document is created or regenerated
    #[serde(default = "default_header")]
    pub header: String,

    /// Tag marking the start of the versioning scheme; history stops there
    #[serde(default = "default_start_marker_tag")]
    pub start_marker_tag: String,

    /// Note closing the start marker's section
    #[serde(default = "default_start_marker_note")]
    pub start_marker_note: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            file_name: default_file_name(),
            header: default_header(),
            start_marker_tag: default_start_marker_tag(),
            start_marker_note: default_start_marker_note(),
        }
    }
}

impl Config {
    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.history.divisor.is_empty() {
            return Err(crate::error::ChangelogError::config(
                "history.divisor must not be empty",
            ));
        }
        if self.history.limit == 0 {
            return Err(crate::error::ChangelogError::config(
                "history.limit must be greater than zero",
            ));
        }
        if self.document.file_name.trim().is_empty() {
            return Err(crate::error::ChangelogError::config(
                "document.file_name must not be empty",
            ));
        }
        // an empty marker is contained in every section and ends the walk at once
        if self.document.start_marker_tag.trim().is_empty() {
            return Err(crate::error::ChangelogError::config(
                "document.start_marker_tag must not be empty",
            ));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./changelog.toml").exists() {
        fs::read_to_string("./changelog.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".changelog.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    tracing::debug!(?config.history, "configuration loaded");
    Ok(config)
}
