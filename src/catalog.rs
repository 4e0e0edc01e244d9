//! Per-platform fixture and template tables.
//!
//! Everything platform-specific about results and suggestions lives here as
//! data: canned result fixtures, query templates, trending terms, popular
//! searches, and per-platform search tips. Adding a platform's data is a
//! change in this file only.

use crate::{DirectAction, Platform, ResultType, SearchResult};

/// Suggestion templates per platform. `{}` is replaced with the query.
pub fn suggestion_templates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::YouTube => &["{} tutorial", "{} review", "{} 2024", "how to {}"],
        Platform::Reddit => &["r/{}", "{} reddit", "{} discussion", "{} community"],
        Platform::Instagram => &["#{}", "{} instagram", "{} photos", "{} stories"],
        _ => &[],
    }
}

/// Trending terms per platform. Not query-dependent.
pub fn trending_terms(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::YouTube => &[
            "iOS 17 tutorial",
            "SwiftUI tips",
            "App development",
            "Coding tutorial",
        ],
        Platform::Reddit => &["r/iOSProgramming", "r/swift", "r/apple", "r/technology"],
        _ => &[],
    }
}

/// The fixed popular-searches list.
pub fn popular_searches() -> &'static [&'static str] {
    &[
        "iOS tutorial",
        "SwiftUI",
        "App development",
        "Coding tips",
        "Design patterns",
    ]
}

/// One-line search tip per platform.
pub fn search_tip(platform: Platform) -> &'static str {
    match platform {
        Platform::YouTube => "Try: 'iOS tutorial', 'SwiftUI tips', 'coding tutorial'",
        Platform::Reddit => "Try: 'r/iOSProgramming', 'r/swift', 'iOS development'",
        Platform::Instagram => "Try: 'iOS design', 'app development', 'coding'",
        Platform::Facebook => "Try: 'iOS groups', 'developer community', 'app development'",
        Platform::Twitter => "Try: 'iOS dev', 'SwiftUI', 'app development'",
        Platform::Google | Platform::Bing => "Try: 'iOS development guide', 'SwiftUI documentation'",
    }
}

/// Canned result table for a platform, or `None` when the platform has no
/// dedicated table and the caller should use [`fallback_result`].
pub fn canned_results(platform: Platform) -> Option<Vec<SearchResult>> {
    match platform {
        Platform::YouTube => Some(vec![
            SearchResult::new(
                "How to Build iOS Apps with SwiftUI - Complete Tutorial 2024",
                "Learn the basics of SwiftUI and build your first iOS app with modern UI design patterns. \
                 This comprehensive tutorial covers everything from basic concepts to advanced features.",
                "https://youtube.com/watch?v=example1",
                Platform::YouTube,
            )
            .with_type(ResultType::Video)
            .with_metadata("duration", "15:30")
            .with_metadata("views", "125K")
            .with_metadata("channel", "iOS Dev")
            .with_metadata("uploaded", "2 days ago")
            .with_preview(
                "In this tutorial, we'll cover SwiftUI basics, UI components, navigation, and data \
                 binding. Perfect for beginners!",
            )
            .with_action(DirectAction::OpenInApp),
            SearchResult::new(
                "iOS 17 Design Guidelines - Glass Morphism & New Patterns",
                "Complete guide to designing apps for iOS 17 with glass morphism and new design \
                 patterns. Learn how to create beautiful, modern interfaces.",
                "https://youtube.com/watch?v=example2",
                Platform::YouTube,
            )
            .with_type(ResultType::Video)
            .with_metadata("duration", "22:15")
            .with_metadata("views", "89K")
            .with_metadata("channel", "Design Master")
            .with_metadata("uploaded", "1 week ago")
            .with_preview(
                "Discover the latest iOS design trends including glass morphism, dynamic colors, \
                 and accessibility improvements.",
            )
            .with_action(DirectAction::OpenInApp),
            SearchResult::new(
                "SwiftUI Glass Morphism Tutorial - Step by Step Guide",
                "Step-by-step tutorial on creating beautiful glass morphism effects in SwiftUI. \
                 Learn advanced UI techniques and animations.",
                "https://youtube.com/watch?v=example3",
                Platform::YouTube,
            )
            .with_type(ResultType::Video)
            .with_metadata("duration", "18:45")
            .with_metadata("views", "67K")
            .with_metadata("channel", "Swift Tutorials")
            .with_metadata("uploaded", "3 days ago")
            .with_preview(
                "Create stunning glass morphism effects with blur, transparency, and dynamic \
                 backgrounds in your SwiftUI apps.",
            )
            .with_action(DirectAction::OpenInApp),
        ]),
        Platform::Reddit => Some(vec![
            SearchResult::new(
                "Best iOS development resources in 2024 - Comprehensive Guide",
                "r/iOSProgramming - A comprehensive list of the best resources for iOS development \
                 this year. Books, courses, tools, and communities.",
                "https://reddit.com/r/iOSProgramming/comments/example1",
                Platform::Reddit,
            )
            .with_type(ResultType::Post)
            .with_metadata("upvotes", "1.2k")
            .with_metadata("comments", "234")
            .with_metadata("subreddit", "r/iOSProgramming")
            .with_metadata("posted", "5 hours ago")
            .with_preview(
                "Here's my curated list of the best iOS development resources for 2024. I've been \
                 developing for iOS for 5 years and these are the tools that have helped me the most...",
            )
            .with_action(DirectAction::OpenInApp),
            SearchResult::new(
                "SwiftUI vs UIKit: Which should you learn in 2024?",
                "r/swift - Detailed comparison and recommendations for new iOS developers. Pros and \
                 cons of each framework.",
                "https://reddit.com/r/swift/comments/example2",
                Platform::Reddit,
            )
            .with_type(ResultType::Post)
            .with_metadata("upvotes", "856")
            .with_metadata("comments", "156")
            .with_metadata("subreddit", "r/swift")
            .with_metadata("posted", "1 day ago")
            .with_preview(
                "I'm a beginner iOS developer and I'm confused about whether to learn SwiftUI or \
                 UIKit first. Here's my analysis after researching both...",
            )
            .with_action(DirectAction::OpenInApp),
        ]),
        Platform::Google => Some(vec![SearchResult::new(
            "iOS Development Guide - Apple Developer",
            "Official iOS development documentation and resources from Apple. Learn to build apps \
             for iPhone, iPad, and Mac.",
            "https://developer.apple.com/ios/",
            Platform::Google,
        )
        .with_type(ResultType::Website)
        .with_metadata("domain", "developer.apple.com")
        .with_metadata("type", "Official Documentation")
        .with_preview(
            "Start your journey in iOS development with official Apple resources, tutorials, and \
             documentation.",
        )
        .with_action(DirectAction::OpenInBrowser)]),
        _ => None,
    }
}

/// Generic templated result for platforms without a canned table.
pub fn fallback_result(platform: Platform) -> SearchResult {
    SearchResult::new(
        format!("Sample {} Result", platform.display_name()),
        format!(
            "This is a sample result for {} search with enhanced metadata and preview content.",
            platform.display_name()
        ),
        format!("https://{}.com/sample", platform.id()),
        platform,
    )
    .with_type(ResultType::Website)
    .with_metadata("domain", format!("{}.com", platform.id()))
    .with_preview(format!(
        "Sample preview content for {} search results.",
        platform.display_name()
    ))
    .with_action(DirectAction::OpenInBrowser)
}
