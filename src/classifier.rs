use crate::config::KeywordsConfig;
use crate::domain::CommitCategory;

/// Keyword-based commit classifier.
///
/// Categories are tried in a fixed precedence (merges, added, removed,
/// fixed) and the first one with a keyword contained in the lowercased
/// subject wins. Anything else is `Changed`.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<(CommitCategory, Vec<String>)>,
}

impl Classifier {
    pub fn new(keywords: &KeywordsConfig) -> Self {
        let lowered = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };

        Classifier {
            rules: vec![
                (CommitCategory::Merges, lowered(&keywords.merges)),
                (CommitCategory::Added, lowered(&keywords.added)),
                (CommitCategory::Removed, lowered(&keywords.removed)),
                (CommitCategory::Fixed, lowered(&keywords.fixed)),
            ],
        }
    }

    pub fn classify(&self, message: &str) -> CommitCategory {
        let message = message.to_lowercase();

        self.rules
            .iter()
            .find(|(_, words)| words.iter().any(|word| message.contains(word.as_str())))
            .map(|(category, _)| *category)
            .unwrap_or(CommitCategory::Changed)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(&KeywordsConfig::default())
    }
}

/// Classify a subject with the built-in keyword lists
pub fn classify(message: &str) -> CommitCategory {
    Classifier::default().classify(message)
}
