//! The process-wide, file-backed settings store.
//!
//! [`ConfigStore`] wraps a [`SettingsMap`] in a single mutex and adds the
//! disk half of the contract: `load_once` reads the backing text file at
//! most once per store lifetime, `save` writes the current pairs back out.
//! Every operation, including the file I/O, runs inside the one critical
//! section, so disk access is serialized with in-memory updates and callers
//! observe a total order of operations.
//!
//! # Why `OnceLock` instead of double-checked locking? (for beginners)
//!
//! The classic singleton recipe is *double-checked locking*: check a shared
//! pointer, take a lock, check again, construct.  Getting that right by hand
//! requires careful atomic ordering, and the standard library already ships
//! the correct version: [`std::sync::OnceLock`] guarantees the initializer
//! runs exactly once even when many threads race on first access, and every
//! caller gets a reference to the same fully-constructed value.  So
//! [`ConfigStore::shared`] is the whole pattern in three lines.
//!
//! # Why `parking_lot::Mutex`? (for beginners)
//!
//! `std::sync::Mutex` poisons itself when a thread panics while holding the
//! lock, which forces every `lock()` call site to handle a `Result` that
//! can effectively never be recovered from here.  `parking_lot::Mutex`
//! has no poisoning and `lock()` returns the guard directly, which keeps
//! the store's methods free of `unwrap` noise.  The store is synchronous by
//! contract (operations run to completion once they hold the lock), so an
//! async-aware mutex would buy nothing.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info};

use patterns_core::config::format;
use patterns_core::SettingsMap;

/// Error type for settings store operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing file does not exist at load time.
    #[error("configuration file not found: {}", .path.display())]
    SourceMissing { path: PathBuf },

    /// The backing file exists but could not be read, or could not be written.
    #[error("I/O error accessing configuration at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested key is absent from the store.
    #[error("setting not found: {0}")]
    KeyNotFound(String),
}

/// Mutex-guarded settings table with file-backed load and save.
///
/// One instance per process is the normal deployment, obtained through
/// [`ConfigStore::shared`].  Constructing private instances with
/// [`ConfigStore::new`] stays possible so tests and embedders are not
/// forced through the global handle.
#[derive(Debug, Default)]
pub struct ConfigStore {
    inner: Mutex<SettingsMap>,
}

impl ConfigStore {
    /// Creates an empty, not-yet-loaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide store, constructing it on first call.
    ///
    /// Concurrent first-time callers all observe the same fully-constructed
    /// instance; construction runs at most once for the process lifetime and
    /// the instance is never destroyed or reset.
    pub fn shared() -> &'static ConfigStore {
        static SHARED: OnceLock<ConfigStore> = OnceLock::new();
        SHARED.get_or_init(ConfigStore::new)
    }

    /// Loads the backing file into the store, at most once.
    ///
    /// The file is parsed line by line: blank lines and `#` comments are
    /// skipped, remaining lines split on their first `=` with key and value
    /// trimmed, and lines without a `=` are silently ignored.  On success
    /// the store is marked loaded and every later call returns immediately
    /// without touching the file or the map, even with a different path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceMissing`] when the file does not exist
    /// and [`ConfigError::Io`] when it exists but cannot be read.  A failed
    /// load leaves the store unmarked, so a later call may retry.
    pub fn load_once(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let mut settings = self.inner.lock();
        if settings.is_loaded() {
            debug!("settings already loaded, ignoring load request");
            return Ok(());
        }

        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::SourceMissing {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        settings.absorb(format::parse_document(&text));
        info!(
            "loaded {} settings from {}",
            settings.len(),
            path.display()
        );
        Ok(())
    }

    /// Writes every current pair to `path` as `key=value` lines, sorted by
    /// key, overwriting any existing content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] on write failure; in-memory state is
    /// unaffected either way.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let settings = self.inner.lock();
        let path = path.as_ref();
        let text = format::serialize_settings(settings.entries());
        fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("saved {} settings to {}", settings.len(), path.display());
        Ok(())
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when the key is absent; the
    /// error message carries the key for diagnostics.  Callers probing for
    /// optional keys treat this as a recoverable signal, or use
    /// [`ConfigStore::get_or_default`] instead.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let settings = self.inner.lock();
        settings
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }

    /// Returns the value for `key`, or `default` when absent.  Never fails.
    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        self.inner.lock().get_or_default(key, default)
    }

    /// Inserts or overwrites the mapping for `key`.  Never fails.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.lock().set(key, value);
    }

    /// Logs every current pair at info level and returns the listing,
    /// one `key = value` per line, sorted by key.
    pub fn dump_all(&self) -> String {
        let settings = self.inner.lock();
        let mut listing = String::new();
        info!("=== CONFIG ({} settings) ===", settings.len());
        for (key, value) in settings.entries() {
            info!("{key} = {value}");
            listing.push_str(&key);
            listing.push_str(" = ");
            listing.push_str(&value);
            listing.push('\n');
        }
        listing
    }

    /// Returns `true` once a backing file has been successfully loaded.
    pub fn is_loaded(&self) -> bool {
        self.inner.lock().is_loaded()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` when no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
