//! Report assembly walkthrough.
//!
//! The director runs the same recipe over both concrete builders: a sales
//! summary in the plain-text layout, and a markup-laden document in the
//! HTML layout to show the escaping at work.

use patterns_core::{HtmlReportBuilder, Report, ReportDirector, TextReportBuilder};

/// Assembles the sales summary in the plain-text layout.
pub fn sales_text_report() -> Report {
    let mut builder = TextReportBuilder::new();
    ReportDirector::construct(
        &mut builder,
        "Sales report",
        "Sales grew 15% over the month.",
        "End of report",
    );
    builder.into_report()
}

/// Assembles a report whose content carries markup characters, in the HTML
/// layout.  Rendering escapes them.
pub fn markup_html_report() -> Report {
    let mut builder = HtmlReportBuilder::new();
    ReportDirector::construct(
        &mut builder,
        "HTML Report",
        "An HTML report with <tags> & symbols.",
        "Footer",
    );
    builder.into_report()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
