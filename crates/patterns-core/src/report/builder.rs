//! Builder/director pair for assembling [`Report`]s.

use crate::report::document::{Report, ReportFormat};

/// Receives report parts one at a time.
///
/// The trait is object-safe so the director can drive any builder through
/// `&mut dyn ReportBuilder`.  Handing over the finished report is an
/// inherent `into_report()` on each concrete builder, since a consuming
/// method would make the trait unusable as a trait object.
#[cfg_attr(test, mockall::automock)]
pub trait ReportBuilder {
    fn set_header(&mut self, header: &str);
    fn set_content(&mut self, content: &str);
    fn set_footer(&mut self, footer: &str);
}

// ── Concrete builders ─────────────────────────────────────────────────────────

/// Builds a plain-text [`Report`].
#[derive(Debug)]
pub struct TextReportBuilder {
    report: Report,
}

impl TextReportBuilder {
    pub fn new() -> Self {
        Self {
            report: Report::empty(ReportFormat::Text),
        }
    }

    /// Hands over the assembled report.
    pub fn into_report(self) -> Report {
        self.report
    }
}

impl Default for TextReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder for TextReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.set_header(header);
    }

    fn set_content(&mut self, content: &str) {
        self.report.set_content(content);
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.set_footer(footer);
    }
}

/// Builds an HTML [`Report`]; all parts are escaped at render time.
#[derive(Debug)]
pub struct HtmlReportBuilder {
    report: Report,
}

impl HtmlReportBuilder {
    pub fn new() -> Self {
        Self {
            report: Report::empty(ReportFormat::Html),
        }
    }

    /// Hands over the assembled report.
    pub fn into_report(self) -> Report {
        self.report
    }
}

impl Default for HtmlReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder for HtmlReportBuilder {
    fn set_header(&mut self, header: &str) {
        self.report.set_header(header);
    }

    fn set_content(&mut self, content: &str) {
        self.report.set_content(content);
    }

    fn set_footer(&mut self, footer: &str) {
        self.report.set_footer(footer);
    }
}

// ── Director ──────────────────────────────────────────────────────────────────

/// Encodes the one assembly recipe: header, then content, then footer.
///
/// # Examples
///
/// ```rust
/// use patterns_core::{HtmlReportBuilder, ReportDirector};
///
/// let mut builder = HtmlReportBuilder::new();
/// ReportDirector::construct(&mut builder, "Q3", "All green.", "fin");
/// let html = builder.into_report().render();
/// assert!(html.contains("<h1>Q3</h1>"));
/// ```
pub struct ReportDirector;

impl ReportDirector {
    /// Feeds all three parts to `builder` in the canonical order.
    pub fn construct(builder: &mut dyn ReportBuilder, header: &str, content: &str, footer: &str) {
        builder.set_header(header);
        builder.set_content(content);
        builder.set_footer(footer);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
