//! Application layer: the walkthroughs the demo binary runs.
//!
//! Each sub-module is one use case orchestrating domain types from
//! `patterns_core` and the store from `infrastructure::storage`.  The
//! walkthroughs take their collaborators as parameters (most importantly a
//! `&ConfigStore`), so tests can drive them against isolated instances
//! instead of the process-wide handle.
//!
//! # Sub-modules
//!
//! - **`verify_handle`**   – Spawns N threads that all request the shared
//!   store handle and checks they observed the same instance.
//!
//! - **`exercise_store`**  – The configuration lifecycle: load once (twice,
//!   to show the no-op), mutate, dump, save, and probe a missing key.
//!
//! - **`compose_reports`** – Drives the report director over both concrete
//!   builders.
//!
//! - **`clone_orders`**    – Builds an order, deep-duplicates it, and edits
//!   the copy for what-if pricing.

pub mod clone_orders;
pub mod compose_reports;
pub mod exercise_store;
pub mod verify_handle;
