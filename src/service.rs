//! Search service orchestration.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog;
use crate::history::{HistoryStore, SearchHistory};
use crate::{Platform, Result, SearchError, SearchResult, SearchSuggestion, SuggestionType};

/// Recent-history entries considered for suggestions.
const MAX_RECENT_SUGGESTIONS: usize = 3;

/// Maximum suggestions returned per call.
const MAX_SUGGESTIONS: usize = 8;

/// Mock search and suggestion engine with a bounded recent-search history.
///
/// Searching never mutates state; callers record queries explicitly via
/// [`SearchService::record_query`]. The history store is injected, so one
/// service constructed at application start is the single source of truth
/// for recent queries.
pub struct SearchService {
    history: SearchHistory,
    store: Box<dyn HistoryStore>,
}

impl SearchService {
    /// Creates a service backed by the given store, loading any persisted
    /// history.
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        let history = SearchHistory::from_entries(store.load());
        debug!("Loaded {} recent searches", history.len());
        Self { history, store }
    }

    /// Performs a mock search.
    ///
    /// Pure lookup: canned table when the platform has one, otherwise a
    /// single generic fallback. Always returns at least one result. Does
    /// not touch history.
    pub fn search(&self, query: &str, platform: Platform) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery("Query cannot be empty".into()));
        }

        let results = catalog::canned_results(platform)
            .unwrap_or_else(|| vec![catalog::fallback_result(platform)]);
        debug!(
            "Search '{}' on {} returned {} results",
            query,
            platform.id(),
            results.len()
        );
        Ok(results)
    }

    /// Records a query in the recent-search history and persists it.
    ///
    /// No-op, including no store write, when the query is already present.
    pub fn record_query(&mut self, query: &str) -> Result<()> {
        if self.history.record(query) {
            self.store.save(self.history.entries())?;
            debug!("Recorded query '{}'", query);
        }
        Ok(())
    }

    /// Produces up to 8 suggestions for a query, in priority order:
    /// recent matches, platform template expansions, platform trending
    /// terms. Deduplicated by text, first-seen-wins, so the priority order
    /// survives deduplication.
    pub fn suggestions(&self, query: &str, platform: Platform) -> Vec<SearchSuggestion> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<SearchSuggestion> = Vec::new();

        candidates.extend(
            self.history
                .matching(query)
                .take(MAX_RECENT_SUGGESTIONS)
                .map(|text| SearchSuggestion::new(text, SuggestionType::Recent, None)),
        );

        candidates.extend(
            catalog::suggestion_templates(platform)
                .iter()
                .map(|template| template.replacen("{}", query, 1))
                .map(|text| SearchSuggestion::new(text, SuggestionType::Related, Some(platform))),
        );

        candidates.extend(
            catalog::trending_terms(platform)
                .iter()
                .map(|text| SearchSuggestion::new(*text, SuggestionType::Trending, Some(platform))),
        );

        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|s| seen.insert(s.text.clone()))
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// The recent-search history, most-recent-first.
    pub fn recent_searches(&self) -> &[String] {
        self.history.entries()
    }

    /// The fixed popular-searches list.
    pub fn popular_searches(&self) -> &'static [&'static str] {
        catalog::popular_searches()
    }

    /// Clears the history and persists the empty state.
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.store.save(self.history.entries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistoryStore;

    fn service() -> SearchService {
        SearchService::new(Box::new(MemoryHistoryStore::new()))
    }

    #[test]
    fn test_search_youtube_canned_fixtures() {
        let service = service();
        let results = service.search("iOS", Platform::YouTube).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].title,
            "How to Build iOS Apps with SwiftUI - Complete Tutorial 2024"
        );
        assert_eq!(
            results[1].title,
            "iOS 17 Design Guidelines - Glass Morphism & New Patterns"
        );
        assert_eq!(
            results[2].title,
            "SwiftUI Glass Morphism Tutorial - Step by Step Guide"
        );
    }

    #[test]
    fn test_search_bing_fallback() {
        let service = service();
        let results = service.search("x", Platform::Bing).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://bing.com/sample");
    }

    #[test]
    fn test_search_always_non_empty() {
        let service = service();
        for platform in Platform::all() {
            let results = service.search("anything", *platform).unwrap();
            assert!(!results.is_empty());
        }
    }

    #[test]
    fn test_search_rejects_empty_query() {
        let service = service();
        let err = service.search("   ", Platform::Google).unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }

    #[test]
    fn test_search_does_not_record_history() {
        let service = service();
        service.search("swift", Platform::YouTube).unwrap();
        assert!(service.recent_searches().is_empty());
    }

    #[test]
    fn test_record_query_idempotent() {
        let mut service = service();
        service.record_query("a").unwrap();
        service.record_query("a").unwrap();
        assert_eq!(service.recent_searches(), &["a".to_string()]);
    }

    #[test]
    fn test_record_query_cap() {
        let mut service = service();
        for i in 0..11 {
            service.record_query(&format!("q{}", i)).unwrap();
        }
        assert_eq!(service.recent_searches().len(), 10);
        assert_eq!(service.recent_searches()[0], "q10");
    }

    #[test]
    fn test_suggestions_empty_query() {
        let service = service();
        assert!(service.suggestions("", Platform::YouTube).is_empty());
    }

    #[test]
    fn test_suggestions_capped_at_eight() {
        let mut service = service();
        service.record_query("swift tutorial").unwrap();
        service.record_query("swift tips").unwrap();
        service.record_query("swift news").unwrap();
        let suggestions = service.suggestions("swift", Platform::YouTube);
        assert!(suggestions.len() <= 8);
        // 3 recent + 4 related + 4 trending candidates, all distinct texts
        assert_eq!(suggestions.len(), 8);
    }

    #[test]
    fn test_suggestions_no_duplicate_texts() {
        let mut service = service();
        service.record_query("swift tutorial").unwrap();
        let suggestions = service.suggestions("swift", Platform::YouTube);
        let mut seen = std::collections::HashSet::new();
        for s in &suggestions {
            assert!(seen.insert(s.text.clone()), "duplicate text: {}", s.text);
        }
    }

    #[test]
    fn test_suggestions_priority_order_preserved() {
        let mut service = service();
        service.record_query("swift tutorial").unwrap();
        let suggestions = service.suggestions("swift", Platform::YouTube);
        // Recent match comes first, template expansions after, trending last.
        assert_eq!(suggestions[0].text, "swift tutorial");
        assert_eq!(suggestions[0].kind, SuggestionType::Recent);
        assert_eq!(suggestions[1].text, "swift review");
        assert_eq!(suggestions[1].kind, SuggestionType::Related);
        assert_eq!(suggestions.last().unwrap().kind, SuggestionType::Trending);
    }

    #[test]
    fn test_suggestions_dedup_first_seen_wins() {
        let mut service = service();
        // "swift tutorial" exists both as a recent entry and as the
        // "{} tutorial" template expansion; the recent one must win.
        service.record_query("swift tutorial").unwrap();
        let suggestions = service.suggestions("swift", Platform::YouTube);
        let hit = suggestions.iter().find(|s| s.text == "swift tutorial").unwrap();
        assert_eq!(hit.kind, SuggestionType::Recent);
    }

    #[test]
    fn test_suggestions_recent_limited_to_three() {
        let mut service = service();
        for i in 0..5 {
            service.record_query(&format!("swift {}", i)).unwrap();
        }
        let suggestions = service.suggestions("swift", Platform::Facebook);
        // Facebook has no templates or trending, so only recents appear.
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.kind == SuggestionType::Recent));
    }

    #[test]
    fn test_suggestions_platform_without_any_sets() {
        let service = service();
        // No history, no templates, no trending: nothing to suggest.
        assert!(service.suggestions("swift", Platform::Bing).is_empty());
    }

    #[test]
    fn test_suggestions_reddit_templates() {
        let service = service();
        let suggestions = service.suggestions("rust", Platform::Reddit);
        assert_eq!(suggestions[0].text, "r/rust");
        assert_eq!(suggestions[0].platform, Some(Platform::Reddit));
    }

    #[test]
    fn test_clear_history() {
        let mut service = service();
        service.record_query("a").unwrap();
        service.clear_history().unwrap();
        assert!(service.recent_searches().is_empty());
    }

    #[test]
    fn test_history_loaded_from_store() {
        let store = MemoryHistoryStore::with_entries(vec!["a".to_string(), "b".to_string()]);
        let service = SearchService::new(Box::new(store));
        assert_eq!(service.recent_searches(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_popular_searches() {
        let service = service();
        assert_eq!(service.popular_searches().len(), 5);
    }
}
