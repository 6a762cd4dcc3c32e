use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Version shape accepted for release tags: `MAJOR.MINOR.PATCH[-(alpha|beta|rc)]`
pub const VERSION_PATTERN: &str = r"\d+\.\d+\.\d+(?:-(?:alpha|beta|rc))?";

/// Tag name starting with a version (`git tag` output filter)
fn tag_name_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}", VERSION_PATTERN)).ok())
        .as_ref()
}

/// `tag: <version>` at the very start of a ref decoration
fn tag_marker_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"^tag:\s({})", VERSION_PATTERN)).ok())
        .as_ref()
}

/// `## <version>` anywhere in a line of the document
fn section_header_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"##\s({})", VERSION_PATTERN)).ok())
        .as_ref()
}

/// A release tag identifier.
///
/// Ordering is plain string ordering, so `"10.0.0" < "2.0.0"` and
/// `"1.0.0" < "1.0.0-rc"`. Existing changelogs were produced with this
/// ordering and merges rely on it staying the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionTag(String);

impl VersionTag {
    /// Wrap a tag without validating it
    pub fn new(name: impl Into<String>) -> Self {
        VersionTag(name.into())
    }

    /// Accept a repository tag name whose prefix is version-shaped.
    ///
    /// The full name is kept so it can still be resolved as a git ref
    /// (e.g. `1.2.0-hotfix` stays `1.2.0-hotfix`).
    pub fn from_tag_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let re = tag_name_regex()?;
        if re.is_match(name) {
            Some(VersionTag(name.to_string()))
        } else {
            None
        }
    }

    /// Extract the tag from a ref decoration such as `tag: 1.2.0, origin/main`.
    ///
    /// Only a tag marker at the start of the field counts.
    pub fn from_ref(ref_field: &str) -> Option<Self> {
        let captures = tag_marker_regex()?.captures(ref_field)?;
        captures.get(1).map(|m| VersionTag(m.as_str().to_string()))
    }

    /// Extract the first `## <version>` token from a line or block of text
    pub fn from_section_header(text: &str) -> Option<Self> {
        let captures = section_header_regex()?.captures(text)?;
        captures.get(1).map(|m| VersionTag(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep the version-shaped tag names and sort them newest first (string order).
pub fn valid_version_tags<I, S>(names: I) -> Vec<VersionTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<VersionTag> = names
        .into_iter()
        .filter_map(|name| VersionTag::from_tag_name(name.as_ref()))
        .collect();
    tags.sort_by(|a, b| b.cmp(a));
    tags.dedup();
    tags
}
