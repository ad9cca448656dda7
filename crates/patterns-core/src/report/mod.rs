//! Report rendering: a document assembled part by part, rendered to one of
//! two fixed layouts.
//!
//! # What is the builder pattern here? (for beginners)
//!
//! A [`document::Report`] has three parts (header, content, footer) and a
//! format chosen up front.  Rather than passing all three strings to one
//! constructor, a *builder* receives them one at a time and hands over the
//! finished report at the end:
//!
//! ```text
//! ReportDirector::construct(builder, h, c, f)
//!   ├─ builder.set_header(h)
//!   ├─ builder.set_content(c)
//!   └─ builder.set_footer(f)
//! builder.into_report() → Report
//! ```
//!
//! The *director* encodes the assembly order once, so every caller builds
//! reports the same way regardless of which concrete builder (text or HTML)
//! it was given.

pub mod builder;
pub mod document;
