//! The report document and its two renderings.

use std::fmt;

/// Output layout selected when the report's builder is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain-text block with `===` / `---` rules around header and footer.
    Text,
    /// Fixed five-line HTML document; all parts entity-escaped.
    Html,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "TEXT"),
            ReportFormat::Html => write!(f, "HTML"),
        }
    }
}

/// A report assembled from header, content, and footer parts.
///
/// Parts default to the empty string, so a builder that never set a part
/// still renders a complete (if sparse) document.  Construction goes through
/// the builders in [`crate::report::builder`]; this type only knows how to
/// hold the parts and render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    format: ReportFormat,
    header: String,
    content: String,
    footer: String,
}

impl Report {
    /// Creates an empty report for the given format.
    ///
    /// Crate-private: callers obtain reports from a builder.
    pub(crate) fn empty(format: ReportFormat) -> Self {
        Self {
            format,
            header: String::new(),
            content: String::new(),
            footer: String::new(),
        }
    }

    pub(crate) fn set_header(&mut self, header: &str) {
        self.header = header.to_string();
    }

    pub(crate) fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    pub(crate) fn set_footer(&mut self, footer: &str) {
        self.footer = footer.to_string();
    }

    /// The layout this report renders to.
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Renders the report to its final string form.
    ///
    /// The text layout passes parts through verbatim.  The HTML layout
    /// escapes `&`, `<`, and `>` in every part, so content like
    /// `"a <b> & c"` cannot break out of its element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use patterns_core::{ReportDirector, TextReportBuilder};
    ///
    /// let mut builder = TextReportBuilder::new();
    /// ReportDirector::construct(&mut builder, "Title", "Body", "End");
    /// assert_eq!(
    ///     builder.into_report().render(),
    ///     "=== Title ===\nBody\n--- End ---\n"
    /// );
    /// ```
    pub fn render(&self) -> String {
        match self.format {
            ReportFormat::Text => format!(
                "=== {} ===\n{}\n--- {} ---\n",
                self.header, self.content, self.footer
            ),
            ReportFormat::Html => format!(
                "<html>\n  <body>\n    <h1>{}</h1>\n    <p>{}</p>\n    <footer>{}</footer>\n  </body>\n</html>",
                html_escape::encode_text(&self.header),
                html_escape::encode_text(&self.content),
                html_escape::encode_text(&self.footer),
            ),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_render_exact_layout() {
        let mut report = Report::empty(ReportFormat::Text);
        report.set_header("Sales");
        report.set_content("Up 15% this month.");
        report.set_footer("End of report");

        assert_eq!(
            report.render(),
            "=== Sales ===\nUp 15% this month.\n--- End of report ---\n"
        );
    }

    #[test]
    fn test_html_render_exact_layout() {
        let mut report = Report::empty(ReportFormat::Html);
        report.set_header("Title");
        report.set_content("Body");
        report.set_footer("Footer");

        assert_eq!(
            report.render(),
            "<html>\n  <body>\n    <h1>Title</h1>\n    <p>Body</p>\n    <footer>Footer</footer>\n  </body>\n</html>"
        );
    }

    #[test]
    fn test_html_render_escapes_markup_characters() {
        // Arrange: content carrying markup and an ampersand
        let mut report = Report::empty(ReportFormat::Html);
        report.set_content("An HTML report with <tags> & symbols.");

        // Act
        let rendered = report.render();

        // Assert
        assert!(rendered.contains("<p>An HTML report with &lt;tags&gt; &amp; symbols.</p>"));
        assert!(!rendered.contains("<tags>"));
    }

    #[test]
    fn test_text_render_does_not_escape() {
        let mut report = Report::empty(ReportFormat::Text);
        report.set_content("5 < 6 & 7 > 2");
        assert!(report.render().contains("5 < 6 & 7 > 2"));
    }

    #[test]
    fn test_unset_parts_render_as_empty_strings() {
        let report = Report::empty(ReportFormat::Text);
        assert_eq!(report.render(), "===  ===\n\n---  ---\n");
    }
}
