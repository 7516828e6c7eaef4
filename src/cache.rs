//! Cache of scaled icons keyed by resolved resource path.

use crate::icon::Icon;
use std::collections::HashMap;

/// Outcome of loading one resource path.
#[derive(Debug, Clone)]
pub enum CacheEntry {
    /// Decoded and scaled icon
    Loaded(Icon),
    /// Loading failed; the path is not retried
    Failed,
}

impl CacheEntry {
    /// The icon, if loading succeeded
    pub fn icon(&self) -> Option<Icon> {
        match self {
            CacheEntry::Loaded(icon) => Some(icon.clone()),
            CacheEntry::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CacheEntry::Failed)
    }
}

/// Unbounded icon cache.
///
/// Entries are never evicted and live as long as the cache.
#[derive(Debug, Default)]
pub struct IconCache {
    entries: HashMap<String, CacheEntry>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a path
    pub fn get(&self, path: &str) -> Option<&CacheEntry> {
        self.entries.get(path)
    }

    /// Return the cached entry for `path`, running `load` only on a miss.
    pub fn get_or_insert_with<F>(&mut self, path: &str, load: F) -> &CacheEntry
    where
        F: FnOnce() -> CacheEntry,
    {
        self.entries.entry(path.to_string()).or_insert_with(load)
    }

    /// Check if a path has an entry (loaded or failed)
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of cached paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
