//! Integration tests for the file-backed settings store.
//!
//! # Purpose
//!
//! These tests exercise `ConfigStore` through its *public* API the way the
//! application layer uses it, with real threads and a real file system.
//! They verify:
//!
//! - The construct-once-under-race guarantee: any number of threads racing
//!   on first access to the shared handle observe the same instance.
//! - Mutual exclusion: concurrent writers never lose updates and never
//!   leave the map in a torn state.
//! - The full persistence lifecycle: load, mutate, save, and re-load into a
//!   fresh store reproduce the same key-value set.
//!
//! # Temp files
//!
//! Tests that touch the disk create a uniquely-named directory under the
//! system temp dir (`patterns_it_<uuid>`) and remove it at the end, so
//! parallel test runs never collide.

use std::fs;
use std::path::PathBuf;
use std::thread;

use patterns_demo::infrastructure::storage::store::{ConfigError, ConfigStore};
use uuid::Uuid;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("patterns_it_{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

// ── Construct-once-under-race ─────────────────────────────────────────────────

/// Spawns 16 threads that all resolve the shared handle as close to
/// simultaneously as the scheduler allows, and checks every thread saw the
/// same address.
#[test]
fn test_concurrent_first_access_yields_one_instance() {
    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| ConfigStore::shared() as *const ConfigStore as usize))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("probe thread panicked"))
            .collect()
    });

    let first = addresses[0];
    assert!(addresses.iter().all(|&addr| addr == first));
}

// ── Mutual exclusion ──────────────────────────────────────────────────────────

/// Eight writer threads each insert fifty distinct keys; afterwards every
/// single key must be present with its exact value.
#[test]
fn test_concurrent_writers_lose_no_updates() {
    let store = ConfigStore::new();

    thread::scope(|scope| {
        for writer in 0..8 {
            let store = &store;
            scope.spawn(move || {
                for i in 0..50 {
                    store.set(format!("w{writer}_k{i}"), format!("v{i}"));
                }
            });
        }
    });

    assert_eq!(store.len(), 8 * 50);
    for writer in 0..8 {
        for i in 0..50 {
            assert_eq!(
                store.get(&format!("w{writer}_k{i}")).unwrap(),
                format!("v{i}")
            );
        }
    }
}

/// Writers hammering one key while readers poll it: readers must only ever
/// observe a value some writer actually wrote (or the key being absent
/// before the first write), never a torn or foreign value.
#[test]
fn test_readers_see_only_written_values() {
    let store = ConfigStore::new();

    thread::scope(|scope| {
        for writer in 0..4 {
            let store = &store;
            scope.spawn(move || {
                for _ in 0..100 {
                    store.set("contended", format!("writer{writer}"));
                }
            });
        }
        for _ in 0..4 {
            let store = &store;
            scope.spawn(move || {
                for _ in 0..100 {
                    let value = store.get_or_default("contended", "unset");
                    assert!(
                        value == "unset" || value.starts_with("writer"),
                        "unexpected value: {value}"
                    );
                }
            });
        }
    });

    assert!(store.get("contended").unwrap().starts_with("writer"));
}

// ── Persistence lifecycle ─────────────────────────────────────────────────────

/// Load a mixed document, overlay a few writes, save, and re-load into a
/// fresh store: the key-value set must survive the round trip exactly.
#[test]
fn test_full_lifecycle_load_mutate_save_reload() {
    // Arrange
    let dir = temp_dir();
    let source = dir.join("config.txt");
    let saved = dir.join("config_saved.txt");
    fs::write(
        &source,
        "# workbench settings\napp_name = workbench\nthreads=6\nflags=a=b=c\n\nnot a setting\n",
    )
    .unwrap();

    // Act
    let store = ConfigStore::new();
    store.load_once(&source).expect("load");
    store.set("threads", "12");
    store.set("extra", "added at runtime");
    store.save(&saved).expect("save");

    let restored = ConfigStore::new();
    restored.load_once(&saved).expect("reload");

    // Assert
    assert_eq!(restored.len(), 4);
    assert_eq!(restored.get("app_name").unwrap(), "workbench");
    assert_eq!(restored.get("threads").unwrap(), "12");
    assert_eq!(restored.get("flags").unwrap(), "a=b=c");
    assert_eq!(restored.get("extra").unwrap(), "added at runtime");

    fs::remove_dir_all(&dir).ok();
}

/// A second load request after a successful first one must not absorb new
/// content, even from a path that exists and differs.
#[test]
fn test_load_once_is_idempotent_across_paths() {
    let dir = temp_dir();
    let first = dir.join("a.txt");
    let second = dir.join("b.txt");
    fs::write(&first, "origin=first\n").unwrap();
    fs::write(&second, "origin=second\nbonus=1\n").unwrap();

    let store = ConfigStore::new();
    store.load_once(&first).expect("first");
    store.load_once(&second).expect("second is a no-op");
    store.load_once(&second).expect("third is a no-op");

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("origin").unwrap(), "first");

    fs::remove_dir_all(&dir).ok();
}

/// The error for a missing backing file names the path; the error for a
/// missing key names the key.  Both leave the store usable.
#[test]
fn test_error_messages_identify_the_failing_resource() {
    let dir = temp_dir();
    let missing = dir.join("does_not_exist.txt");
    let store = ConfigStore::new();

    let load_err = store.load_once(&missing).unwrap_err();
    assert!(matches!(load_err, ConfigError::SourceMissing { .. }));
    assert!(load_err.to_string().contains("does_not_exist.txt"));

    let get_err = store.get("service_url").unwrap_err();
    assert!(get_err.to_string().contains("service_url"));

    // Still usable after both failures.
    store.set("service_url", "http://localhost");
    assert_eq!(store.get("service_url").unwrap(), "http://localhost");

    fs::remove_dir_all(&dir).ok();
}
