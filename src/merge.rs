//! Splicing newly rendered sections into an existing changelog.

use crate::domain::VersionTag;

/// Tag assumed for content without any section header; sorts below every release
pub const FALLBACK_TAG: &str = "0.0.0";

/// Tags of every `## <version>` line in the document, in document order.
pub fn tags_in_document(content: &str) -> Vec<VersionTag> {
    content
        .lines()
        .filter_map(VersionTag::from_section_header)
        .collect()
}

/// Insert `new_content` ahead of the first existing section whose tag sorts
/// below the new content's first tag.
///
/// Lines are compared only until the insertion point is found; everything
/// after it is copied verbatim. When no existing section sorts lower the new
/// content goes at the end, and a blank document is replaced outright.
pub fn merge_into_document(existing: &str, new_content: &str) -> String {
    if existing.trim().is_empty() {
        return new_content.to_string();
    }

    let new_tag = VersionTag::from_section_header(new_content)
        .unwrap_or_else(|| VersionTag::new(FALLBACK_TAG));

    let mut output = String::with_capacity(existing.len() + new_content.len());
    let mut inserted = false;

    for line in existing.split_inclusive('\n') {
        if !inserted {
            if let Some(tag) = VersionTag::from_section_header(line) {
                if new_tag > tag {
                    tracing::debug!(new = %new_tag, before = %tag, "insertion point found");
                    output.push_str(new_content);
                    inserted = true;
                }
            }
        }
        output.push_str(line);
    }

    if !inserted && !new_content.trim().is_empty() {
        tracing::debug!(new = %new_tag, "no older section found, appending");
        if !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(new_content);
    }

    output
}
