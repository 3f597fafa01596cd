//! Display-name cache persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Cache file name inside the output directory
pub const CACHE_FILE_NAME: &str = "name_cache.json";

/// One persisted resolution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Package identifier the entry belongs to
    pub package_id: String,

    /// When the name was resolved (diagnostic only, entries never expire)
    pub cached_at: DateTime<Utc>,

    /// Resolved or heuristically derived display name
    pub display_name: String,
}

/// Persisted mapping from package identifier to resolved display name.
///
/// One file per output directory, shared by the winget and msstore sources
/// (identifiers in that ecosystem are global). The whole file is loaded on
/// every read and rewritten on every write, which is O(cache size) per
/// write; acceptable because caches are bounded by installed-package counts.
/// No cross-process locking: concurrent runs against the same output
/// directory may race.
#[derive(Debug, Clone)]
pub struct NameCache {
    path: PathBuf,
}

impl NameCache {
    /// Cache backed by `name_cache.json` inside `output_dir`
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(CACHE_FILE_NAME),
        }
    }

    /// Get the cache file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full cache.
    ///
    /// An absent, empty, or unparsable file reads as an empty cache: a
    /// corrupt cache costs a full re-resolution, never a failed run.
    pub async fn load_all(&self) -> BTreeMap<String, CacheEntry> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable cache {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    /// Look up a single identifier
    pub async fn lookup(&self, identifier: &str) -> Option<CacheEntry> {
        self.load_all().await.remove(identifier)
    }

    /// Insert an entry with a fresh timestamp and rewrite the cache file.
    ///
    /// A failed write is logged and swallowed; the resolved name stays
    /// valid in memory for the current run.
    pub async fn store(&self, identifier: &str, display_name: &str) {
        let mut entries = self.load_all().await;
        entries.insert(
            identifier.to_string(),
            CacheEntry {
                package_id: identifier.to_string(),
                cached_at: Utc::now(),
                display_name: display_name.to_string(),
            },
        );

        let content = match serde_json::to_string_pretty(&entries) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize cache: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, content).await {
            warn!("Failed to write cache {}: {}", self.path.display(), e);
        } else {
            debug!("Cached {} -> {}", identifier, display_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let cache = NameCache::new(dir.path());
        assert!(cache.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn store_then_lookup_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cache = NameCache::new(dir.path());

        cache.store("Microsoft.VisualStudioCode", "Visual Studio Code").await;

        let entry = cache.lookup("Microsoft.VisualStudioCode").await.unwrap();
        assert_eq!(entry.display_name, "Visual Studio Code");
        assert_eq!(entry.package_id, "Microsoft.VisualStudioCode");
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CACHE_FILE_NAME), "{not json").unwrap();

        let cache = NameCache::new(dir.path());
        assert!(cache.load_all().await.is_empty());
        assert!(cache.lookup("anything").await.is_none());
    }

    #[tokio::test]
    async fn store_preserves_existing_entries() {
        let dir = TempDir::new().unwrap();
        let cache = NameCache::new(dir.path());

        cache.store("Foo.Bar", "Bar").await;
        cache.store("Baz.Qux", "Qux").await;

        let entries = cache.load_all().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries["Foo.Bar"].display_name, "Bar");
        assert_eq!(entries["Baz.Qux"].display_name, "Qux");
    }

    #[tokio::test]
    async fn cache_file_is_hand_editable() {
        let dir = TempDir::new().unwrap();
        let cache = NameCache::new(dir.path());
        cache.store("Foo.Bar", "Bar").await;

        // Deleting the file forces re-resolution on the next run
        std::fs::remove_file(cache.path()).unwrap();
        assert!(cache.lookup("Foo.Bar").await.is_none());
    }

    #[tokio::test]
    async fn store_to_unwritable_path_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let cache = NameCache::new(&missing);

        // Parent directory missing: write fails, but store must not panic
        cache.store("Foo.Bar", "Bar").await;
        assert!(cache.lookup("Foo.Bar").await.is_none());
    }
}
