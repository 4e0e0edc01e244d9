//! Search suggestion types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::Platform;

/// Provenance of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    /// From the user's recent searches.
    Recent,
    /// From the fixed popular-searches list.
    Popular,
    /// Platform trending term, not query-dependent.
    Trending,
    /// Template expansion of the current query.
    Related,
}

/// A candidate query string offered while the user types.
///
/// Equality and hashing use the text alone: two suggestions with the same
/// text are duplicates regardless of kind or platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSuggestion {
    /// Suggested query text.
    pub text: String,
    /// Provenance tag.
    pub kind: SuggestionType,
    /// Originating platform, if platform-specific.
    pub platform: Option<Platform>,
}

impl SearchSuggestion {
    /// Creates a new suggestion.
    pub fn new(text: impl Into<String>, kind: SuggestionType, platform: Option<Platform>) -> Self {
        Self {
            text: text.into(),
            kind,
            platform,
        }
    }
}

impl PartialEq for SearchSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for SearchSuggestion {}

impl Hash for SearchSuggestion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}
