//! Recent-search history and its persistence stores.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::Result;

/// Maximum number of entries the history retains.
pub const MAX_RECENT: usize = 10;

/// Bounded, deduplicated, most-recent-first list of past queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history from persisted entries, enforcing the cap.
    pub fn from_entries(entries: Vec<String>) -> Self {
        let mut history = Self { entries };
        history.entries.truncate(MAX_RECENT);
        history
    }

    /// Records a query. Returns true if it was inserted.
    ///
    /// An already-present query is left where it is, not promoted to the
    /// front.
    pub fn record(&mut self, query: &str) -> bool {
        if self.entries.iter().any(|e| e == query) {
            return false;
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT);
        true
    }

    /// Entries whose text contains `query`, case-insensitively.
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(move |e| e.to_lowercase().contains(&needle))
            .map(String::as_str)
    }

    /// All entries, most-recent-first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Persistence seam for the recent-search history.
///
/// Implementations hold one logical key-value entry: the ordered list of
/// recent queries.
pub trait HistoryStore: Send {
    /// Loads the persisted entries. Missing or malformed state loads as
    /// empty, never as an error.
    fn load(&self) -> Vec<String>;

    /// Persists the entries, replacing any previous state.
    fn save(&mut self, entries: &[String]) -> Result<()>;
}

/// File-backed store: one JSON array of strings.
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    /// Creates a store writing to the default data directory.
    ///
    /// Resolution order: `FOCUS_SEARCH_DATA_DIR`, then `$XDG_DATA_HOME`,
    /// then `~/.local/share`, each with a `focus-search` subdirectory.
    pub fn new() -> Result<Self> {
        let base_dir = if let Ok(dir) = std::env::var("FOCUS_SEARCH_DATA_DIR") {
            PathBuf::from(dir)
        } else if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
            PathBuf::from(xdg_data).join("focus-search")
        } else {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".local/share/focus-search")
        };
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            path: base_dir.join("recent_searches.json"),
        })
    }

    /// Creates a store writing to an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Vec<String> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!("No history at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Malformed history at {}, starting empty: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string(entries)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral use.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    entries: Vec<String>,
}

impl MemoryHistoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with entries.
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<String> {
        self.entries.clone()
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}
