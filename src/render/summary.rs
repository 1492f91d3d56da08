// short human-readable report
use std::fmt::Write;

use crate::core::builder::CoverageReport;

pub fn text_summary(report: &CoverageReport) -> String {
    let matrix = &report.matrix;
    let total = matrix.requirement_count();
    let uncovered = matrix.uncovered_requirements();
    let covered_reqs = total - uncovered.len();

    let mut out = String::new();
    let _ = writeln!(out, "tests:        {}", matrix.test_count());
    let _ = writeln!(out, "requirements: {total}");
    let _ = writeln!(out, "covered cells: {}", matrix.covered_count());
    if total > 0 {
        let pct = covered_reqs as f64 * 100.0 / total as f64;
        let _ = writeln!(out, "requirement coverage: {covered_reqs}/{total} ({pct:.1}%)");
    }

    if !uncovered.is_empty() {
        let list: Vec<&str> = uncovered.iter().map(|r| r.as_str()).collect();
        let _ = writeln!(out, "uncovered requirements: {}", list.join(", "));
    }

    let idle = matrix.idle_tests();
    if !idle.is_empty() {
        let list: Vec<&str> = idle.iter().map(|t| t.as_str()).collect();
        let _ = writeln!(out, "tests covering nothing: {}", list.join(", "));
    }

    if !report.dangling.is_empty() {
        let _ = writeln!(out, "dangling references: {}", report.dangling.len());
    }
    out
}
