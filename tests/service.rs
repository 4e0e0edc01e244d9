//! End-to-end tests exercising the service against a real file-backed
//! history store.

use focus_search::{
    JsonHistoryStore, MemoryHistoryStore, Platform, SearchService, SuggestionType,
};

#[test]
fn search_returns_fixtures_for_platforms_with_canned_tables() {
    let service = SearchService::new(Box::new(MemoryHistoryStore::new()));

    let youtube = service.search("iOS", Platform::YouTube).unwrap();
    assert_eq!(youtube.len(), 3);

    let reddit = service.search("iOS", Platform::Reddit).unwrap();
    assert_eq!(reddit.len(), 2);

    let google = service.search("iOS", Platform::Google).unwrap();
    assert_eq!(google.len(), 1);
    assert_eq!(google[0].url, "https://developer.apple.com/ios/");
}

#[test]
fn search_falls_back_for_platforms_without_tables() {
    let service = SearchService::new(Box::new(MemoryHistoryStore::new()));

    for platform in [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::Bing,
    ] {
        let results = service.search("anything", platform).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].url,
            format!("https://{}.com/sample", platform.id())
        );
    }
}

#[test]
fn history_round_trips_through_the_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent_searches.json");

    {
        let mut service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
        service.record_query("swift tutorial").unwrap();
        service.record_query("rust").unwrap();
        service.record_query("glass morphism").unwrap();
    }

    // A fresh service over the same file sees the same ordered history.
    let service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
    assert_eq!(
        service.recent_searches(),
        &[
            "glass morphism".to_string(),
            "rust".to_string(),
            "swift tutorial".to_string(),
        ]
    );
}

#[test]
fn history_cap_survives_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent_searches.json");

    {
        let mut service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
        for i in 0..11 {
            service.record_query(&format!("query {}", i)).unwrap();
        }
    }

    let service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
    assert_eq!(service.recent_searches().len(), 10);
    assert_eq!(service.recent_searches()[0], "query 10");
    assert!(!service
        .recent_searches()
        .contains(&"query 0".to_string()));
}

#[test]
fn corrupt_history_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent_searches.json");
    std::fs::write(&path, "not json at all").unwrap();

    let service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
    assert!(service.recent_searches().is_empty());
}

#[test]
fn suggestions_blend_history_with_platform_sets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent_searches.json");

    let mut service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
    service.record_query("swiftui animations").unwrap();

    let suggestions = service.suggestions("swiftui", Platform::YouTube);
    assert!(suggestions.len() <= 8);
    assert_eq!(suggestions[0].text, "swiftui animations");
    assert_eq!(suggestions[0].kind, SuggestionType::Recent);
    assert!(suggestions
        .iter()
        .any(|s| s.kind == SuggestionType::Related && s.text == "how to swiftui"));
    assert!(suggestions
        .iter()
        .any(|s| s.kind == SuggestionType::Trending && s.text == "SwiftUI tips"));
}

#[test]
fn clear_history_persists_the_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recent_searches.json");

    {
        let mut service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
        service.record_query("swift").unwrap();
        service.clear_history().unwrap();
    }

    let service = SearchService::new(Box::new(JsonHistoryStore::at_path(&path)));
    assert!(service.recent_searches().is_empty());
}
