//! In-memory settings table with one-shot load semantics.
//!
//! `SettingsMap` is the pure core of the configuration store: a string map
//! plus the `loaded` flag that records whether a backing document has ever
//! been absorbed.  It knows nothing about files or locks; the demo crate's
//! `ConfigStore` wraps one of these in a mutex and adds the disk I/O.
//!
//! # HashMap choice
//!
//! A `HashMap<String, String>` gives O(1) lookup by key.  Iteration order is
//! not guaranteed, which is fine: [`SettingsMap::entries`] sorts by key so
//! listings and saved files come out deterministic anyway.

use std::collections::HashMap;

/// String-to-string settings table.
///
/// Keys are unique; inserting an existing key replaces its value.  The
/// `loaded` flag is set by [`absorb`](SettingsMap::absorb) and never cleared,
/// giving the surrounding store its "load at most once" behavior.
///
/// # Examples
///
/// ```rust
/// use patterns_core::SettingsMap;
///
/// let mut settings = SettingsMap::new();
/// settings.set("host", "10.0.0.1");
/// assert_eq!(settings.get("host"), Some("10.0.0.1"));
/// assert_eq!(settings.get_or_default("port", "8080"), "8080");
/// ```
#[derive(Debug, Default)]
pub struct SettingsMap {
    values: HashMap<String, String>,
    loaded: bool,
}

impl SettingsMap {
    /// Creates an empty, not-yet-loaded table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Inserts or overwrites the mapping for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Bulk-inserts parsed `(key, value)` pairs and marks the table loaded.
    ///
    /// Later pairs win on duplicate keys, matching a per-line map insert.
    /// Called exactly once per table lifetime by the surrounding store; the
    /// `loaded` flag is what makes the second load request a silent no-op.
    pub fn absorb<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in pairs {
            self.values.insert(key, value);
        }
        self.loaded = true;
    }

    /// Returns `true` once a backing document has been absorbed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Returns a snapshot of all pairs, sorted by key.
    ///
    /// Sorting makes listings and saved documents deterministic even though
    /// the underlying map iterates in arbitrary order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
