//! Search result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Platform;

/// Type of search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    /// Video content.
    Video,
    /// Social post or thread.
    Post,
    /// Long-form article.
    Article,
    /// Image result.
    Image,
    /// User or profile.
    User,
    /// Plain website.
    Website,
    /// News article.
    News,
    /// Product listing.
    Product,
}

impl Default for ResultType {
    fn default() -> Self {
        Self::Website
    }
}

/// Action a result suggests the caller take with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectAction {
    /// Open in the platform's native app.
    OpenInApp,
    /// Open in a system browser.
    OpenInBrowser,
    /// Share the result.
    Share,
    /// Bookmark the result.
    Bookmark,
}

/// A single search result.
///
/// Results are created by the search engine and are immutable afterwards:
/// there is no mutating API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique result id.
    pub id: Uuid,
    /// Result title.
    pub title: String,
    /// Result description/snippet.
    pub description: String,
    /// Canonical URL.
    pub url: String,
    /// Thumbnail URL, if any.
    pub thumbnail_url: Option<String>,
    /// Platform that owns this result.
    pub platform: Platform,
    /// Type of result.
    pub result_type: ResultType,
    /// Metadata key -> value pairs, in key order.
    pub metadata: BTreeMap<String, String>,
    /// Long-form preview text, if any.
    pub preview_content: Option<String>,
    /// Suggested direct action, if any.
    pub direct_action: Option<DirectAction>,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            url: url.into(),
            thumbnail_url: None,
            platform,
            result_type: ResultType::Website,
            metadata: BTreeMap::new(),
            preview_content: None,
            direct_action: None,
        }
    }

    /// Sets the result type.
    pub fn with_type(mut self, result_type: ResultType) -> Self {
        self.result_type = result_type;
        self
    }

    /// Sets the thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail.into());
        self
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Sets the preview content.
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview_content = Some(preview.into());
        self
    }

    /// Sets the suggested direct action.
    pub fn with_action(mut self, action: DirectAction) -> Self {
        self.direct_action = Some(action);
        self
    }
}
