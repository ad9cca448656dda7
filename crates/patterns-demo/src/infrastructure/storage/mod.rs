//! Storage infrastructure: the file-backed shared settings store.
//!
//! The `store` sub-module wraps the pure `SettingsMap` from patterns-core
//! in a mutex, adds the disk I/O for `load_once` / `save`, and exposes the
//! process-wide handle.  Keeping the impure half here, rather than inside
//! patterns-core, means the codec and table stay testable without touching
//! the file system.

pub mod store;
