//! Markdown rendering of version sections.

use std::collections::HashMap;

use crate::domain::{CommitCategory, VersionTag};

/// Note written for a section without any rendered commit
pub const NO_MODIFICATIONS_NOTE: &str = "**No modifications were made**";

/// Commit subjects of one release, per category, in the order they were read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitGroup {
    messages: HashMap<CommitCategory, Vec<String>>,
}

impl CommitGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subject under its category. Merge commits are dropped.
    pub fn push(&mut self, category: CommitCategory, message: impl Into<String>) {
        if !category.is_rendered() {
            return;
        }
        self.messages
            .entry(category)
            .or_default()
            .push(message.into());
    }

    pub fn messages(&self, category: CommitCategory) -> &[String] {
        self.messages
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.messages.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }
}

/// `## <tag> - [<date>]` line opening a version section
pub fn render_section_header(tag: &VersionTag, date: &str) -> String {
    format!("## {} - [{}]\n\n", tag, date)
}

/// `### Notes` subsection holding a single bold note
pub fn render_note(note: &str) -> String {
    format!("### {}\n\n* {}\n\n", CommitCategory::Notes.title(), note)
}

/// Render a group as category subsections in the fixed order.
pub fn render_group(group: &CommitGroup) -> String {
    if group.is_empty() {
        return render_note(NO_MODIFICATIONS_NOTE);
    }

    let mut output = String::new();
    for category in CommitCategory::RENDER_ORDER {
        let messages = group.messages(category);
        if messages.is_empty() {
            continue;
        }

        output.push_str(&format!("### {}\n\n", category.title()));
        for message in messages {
            output.push_str(&format!("* {}\n\n", message));
        }
    }
    output
}
