//! # patterns-core
//!
//! Shared library for the patterns workbench containing the settings text
//! codec, the in-memory settings table, the report builder family, and the
//! order snapshot domain types.
//!
//! This crate is used by the demo application and by anything that wants to
//! embed the individual pieces.  It has zero dependencies on the file system,
//! the clock, or process-global state; everything here is a pure value type
//! or a pure function over strings.
//!
//! # Module overview
//!
//! - **`config`** – The line-oriented `key=value` text format (parse and
//!   serialize) and the `SettingsMap` that holds parsed settings in memory.
//!   File access and locking live in the demo crate's infrastructure layer,
//!   not here.
//!
//! - **`report`** – A `Report` that accumulates header/content/footer parts
//!   and renders to one of two fixed layouts (plain text or HTML), plus the
//!   builder/director pair that assembles it.
//!
//! - **`order`** – Priced line items, flat discounts, and the `Order`
//!   aggregate with a deep-duplication operation for independent what-if
//!   edits.

pub mod config;
pub mod order;
pub mod report;

// Re-export the most-used types at the crate root so callers can write
// `patterns_core::SettingsMap` instead of `patterns_core::config::settings::SettingsMap`.
pub use config::format::{parse_document, parse_line, serialize_settings};
pub use config::settings::SettingsMap;
pub use order::snapshot::{Discount, LineItem, Order, OrderId, PaymentMethod};
pub use report::builder::{HtmlReportBuilder, ReportBuilder, ReportDirector, TextReportBuilder};
pub use report::document::{Report, ReportFormat};
