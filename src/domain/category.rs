use std::fmt;

/// Intent of a commit, derived from its subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitCategory {
    Added,
    Changed,
    Removed,
    Fixed,
    Notes,
    Merges,
}

impl CommitCategory {
    /// Order in which subsections appear inside a version section.
    ///
    /// `Merges` is absent: merge commits are classified but never rendered.
    pub const RENDER_ORDER: [CommitCategory; 5] = [
        CommitCategory::Notes,
        CommitCategory::Added,
        CommitCategory::Changed,
        CommitCategory::Fixed,
        CommitCategory::Removed,
    ];

    /// Subsection title used in the `### <Title>` line
    pub fn title(&self) -> &'static str {
        match self {
            CommitCategory::Added => "Added",
            CommitCategory::Changed => "Changed",
            CommitCategory::Removed => "Removed",
            CommitCategory::Fixed => "Fixed",
            CommitCategory::Notes => "Notes",
            CommitCategory::Merges => "Merges",
        }
    }

    /// Whether commits of this category end up in the document
    pub fn is_rendered(&self) -> bool {
        !matches!(self, CommitCategory::Merges)
    }
}

impl fmt::Display for CommitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
