//! Configuration lifecycle walkthrough.
//!
//! Drives one [`ConfigStore`] through the full contract: load the backing
//! file (twice, demonstrating that the second request is a silent no-op),
//! record the run timestamp, dump the table, persist it, and probe a key
//! that is expected to be absent.
//!
//! A missing backing file is downgraded to a warning here: the walkthrough
//! is expected to work on a fresh checkout where `config.txt` does not
//! exist yet.  Any other I/O failure propagates to the caller.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use crate::infrastructure::storage::store::{ConfigError, ConfigStore};

/// Runs the store walkthrough against `store`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the backing file exists but cannot be
/// read, or when saving to `save_path` fails.  A missing backing file and
/// the deliberate missing-key probe are handled internally.
pub fn run(store: &ConfigStore, load_path: &Path, save_path: &Path) -> Result<(), ConfigError> {
    match store.load_once(load_path) {
        Ok(()) => {
            // Second request: idempotent, not cumulative.
            store.load_once(load_path)?;
        }
        Err(ConfigError::SourceMissing { path }) => {
            warn!("no configuration file at {}, starting empty", path.display());
        }
        Err(e) => return Err(e),
    }

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    store.set("last_run", stamp.to_string());

    store.dump_all();
    store.save(save_path)?;
    info!("settings saved to {}", save_path.display());

    // Probe a key that is expected to be absent: KeyNotFound is the one
    // recoverable error in normal operation.
    match store.get("unknown_key") {
        Ok(value) => info!("unknown_key = {value}"),
        Err(err @ ConfigError::KeyNotFound(_)) => info!("expected miss: {err}"),
        Err(e) => return Err(e),
    }

    info!(
        "log_level = {} (defaulted when absent)",
        store.get_or_default("log_level", "info")
    );

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
