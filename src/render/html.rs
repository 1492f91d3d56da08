// plain <table> markup for embedding in a page
use std::fmt::Write;

use crate::config::MarkSymbols;
use crate::core::builder::CoverageReport;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the matrix as a single `<table>`.
///
/// The header row starts with `index_label` (the test-code header), followed by
/// every requirement id in list order. Each distinct test code gets one row.
pub fn matrix_table(report: &CoverageReport, index_label: &str, marks: &MarkSymbols) -> String {
    let mut html = String::from("<table>");

    html.push_str("<tr>");
    let _ = write!(html, "<th>{}</th>", escape(index_label));
    for req in &report.requirement_ids {
        let _ = write!(html, "<th>{}</th>", escape(req));
    }
    html.push_str("</tr>");

    for test in report.matrix.tests() {
        let _ = write!(html, "<tr><td>{}</td>", escape(test));
        for req in &report.requirement_ids {
            let mark = report.matrix.mark(test, req).unwrap_or_default();
            let _ = write!(html, "<td>{}</td>", escape(marks.symbol(mark)));
        }
        html.push_str("</tr>");
    }

    html.push_str("</table>");
    html
}
