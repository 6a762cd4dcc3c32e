use std::fmt;

/// Non-fatal conditions met while building the changelog.
/// These are reported to the user and the run carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangelogWarning {
    /// The repository has no tag shaped like a release version
    NoVersionTags { tag_count: usize },
    /// A history line did not split into ref, subject and date
    MalformedLogRecord { line: String, divisor: String },
    /// The document already lists every tag in history
    AlreadyUpToDate { path: String },
}

impl fmt::Display for ChangelogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangelogWarning::NoVersionTags { tag_count } => {
                write!(
                    f,
                    "No release tags found ({} tag(s) in repository, none shaped like MAJOR.MINOR.PATCH)",
                    tag_count
                )
            }
            ChangelogWarning::MalformedLogRecord { line, divisor } => {
                let short_line: String = line.chars().take(60).collect();
                write!(
                    f,
                    "Skipping history record without two '{}' separators: '{}'",
                    divisor, short_line
                )
            }
            ChangelogWarning::AlreadyUpToDate { path } => {
                write!(f, "Changelog '{}' is already up to date", path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_version_tags_display() {
        let warning = ChangelogWarning::NoVersionTags { tag_count: 3 };
        let msg = warning.to_string();
        assert!(msg.contains("No release tags"));
        assert!(msg.contains("3 tag(s)"));
    }

    #[test]
    fn test_malformed_record_is_shortened() {
        let warning = ChangelogWarning::MalformedLogRecord {
            line: "é".repeat(100),
            divisor: "###".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("'###'"));
        assert_eq!(msg.matches('é').count(), 60);
    }

    #[test]
    fn test_up_to_date_display() {
        let warning = ChangelogWarning::AlreadyUpToDate {
            path: "CHANGELOG.md".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "Changelog 'CHANGELOG.md' is already up to date"
        );
    }
}
