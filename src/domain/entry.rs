use super::tag::VersionTag;

/// One commit record read from history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Raw ref decoration (empty for most commits)
    pub r#ref: String,
    /// Commit subject line
    pub message: String,
    /// Author date, `YYYY-MM-DD`
    pub date: String,
}

impl LogEntry {
    pub fn new(r#ref: impl Into<String>, message: impl Into<String>, date: impl Into<String>) -> Self {
        LogEntry {
            r#ref: r#ref.into(),
            message: message.into(),
            date: date.into(),
        }
    }

    /// Split a `ref<divisor>subject<divisor>date` record.
    ///
    /// The ref ends at the first divisor and the date starts after the last
    /// one, so a subject that itself contains the divisor survives intact.
    /// Returns `None` when the line holds fewer than two divisors.
    pub fn parse(line: &str, divisor: &str) -> Option<Self> {
        if divisor.is_empty() {
            return None;
        }

        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let (r#ref, rest) = line.split_once(divisor)?;
        let (message, date) = rest.rsplit_once(divisor)?;

        Some(LogEntry::new(r#ref.trim(), message.trim(), date.trim()))
    }

    /// The release tag this entry is decorated with, if any
    pub fn tag(&self) -> Option<VersionTag> {
        VersionTag::from_ref(&self.r#ref)
    }
}
