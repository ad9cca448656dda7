//! Infrastructure layer for the demo application.
//!
//! Contains the adapters that touch the outside world, which for this
//! program means exactly one thing: the file system behind the settings
//! store.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `patterns_core`, but MUST NOT be imported by the domain types in
//! `patterns_core`.

pub mod storage;
