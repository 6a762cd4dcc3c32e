use crate::domain::VersionTag;

/// Refs pointing at one commit
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Decoration {
    pub(crate) tags: Vec<String>,
    pub(crate) branches: Vec<String>,
}

impl Decoration {
    /// Read a `git log --pretty=%D` field.
    ///
    /// `HEAD` and `*/HEAD` aliases are dropped, `HEAD -> main` keeps the
    /// branch. Other `refs/...` entries such as the stash are ignored.
    pub(crate) fn parse(raw: &str) -> Self {
        let mut decoration = Decoration::default();

        for item in raw.split(", ").map(str::trim).filter(|item| !item.is_empty()) {
            let item = item.strip_prefix("HEAD -> ").unwrap_or(item);
            if let Some(tag) = item.strip_prefix("tag: ") {
                decoration.tags.push(tag.to_string());
            } else if item == "HEAD" || item.ends_with("/HEAD") || item.starts_with("refs/") {
                continue;
            } else {
                decoration.branches.push(item.to_string());
            }
        }

        decoration
    }

    /// Render like `git log --pretty=%D`, but with release tags first (newest
    /// first), then other tags, then branches.
    pub(crate) fn render(mut self) -> String {
        self.tags.sort_by(|a, b| {
            let a_key = (VersionTag::from_tag_name(a).is_none(), std::cmp::Reverse(a.as_str()));
            let b_key = (VersionTag::from_tag_name(b).is_none(), std::cmp::Reverse(b.as_str()));
            a_key.cmp(&b_key)
        });
        self.branches.sort();

        self.tags
            .iter()
            .map(|tag| format!("tag: {}", tag))
            .chain(self.branches)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
