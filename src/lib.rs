//! # focus-search
//!
//! The core of the Focus app: a fixed registry of search platforms, a mock
//! search engine over canned fixture tables, a suggestion engine, and a
//! persisted, bounded recent-search history.
//!
//! Everything is synchronous and offline. The consumer (a UI, or the CLI in
//! this crate) owns any artificial latency; the core never blocks or spawns
//! work.
//!
//! ## Example
//!
//! ```rust
//! use focus_search::{MemoryHistoryStore, Platform, SearchService};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut service = SearchService::new(Box::new(MemoryHistoryStore::new()));
//!
//!     let results = service.search("swift", Platform::YouTube)?;
//!     service.record_query("swift")?;
//!
//!     for result in &results {
//!         println!("{}: {}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod history;
mod platform;
mod result;
mod service;
mod suggestion;

pub mod catalog;

pub use error::{Result, SearchError};
pub use history::{HistoryStore, JsonHistoryStore, MemoryHistoryStore, SearchHistory, MAX_RECENT};
pub use platform::{Platform, PlatformMeta};
pub use result::{DirectAction, ResultType, SearchResult};
pub use service::SearchService;
pub use suggestion::{SearchSuggestion, SuggestionType};
