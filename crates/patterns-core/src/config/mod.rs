//! Settings text format and in-memory settings table.
//!
//! This module contains the pure half of the configuration story:
//!
//! - **`format`** – How settings travel as text.  A document is parsed line
//!   by line into `(key, value)` pairs and serialized back to `key=value`
//!   lines.
//!
//! - **`settings`** – The `SettingsMap` holding parsed pairs in memory,
//!   together with the one-shot `loaded` flag that makes a second load a
//!   no-op.
//!
//! The impure half (reading and writing actual files, and the process-wide
//! locked store) lives in the demo crate's `infrastructure::storage` module
//! so that this crate stays trivially testable on any platform.

pub mod format;
pub mod settings;
