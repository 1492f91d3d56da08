// matrix as a sheet document: {sheet: [{index: test, req: mark, ...}, ...]}
use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::CoverageConfig;
use crate::core::builder::CoverageReport;
use crate::render::RenderError;

/// Column headers for the requirement ids, in requirement order.
///
/// A requirement id equal to the index header would overwrite the test code, so
/// it gets a `" (requisito)"` suffix (repeated until unique).
fn requirement_headers<'a>(requirements: &'a [String], index: &str) -> Vec<(&'a str, String)> {
    let taken: HashSet<&str> = requirements.iter().map(String::as_str).chain([index]).collect();

    requirements
        .iter()
        .map(|req| {
            let mut header = req.clone();
            if header == index {
                while taken.contains(header.as_str()) {
                    header.push_str(" (requisito)");
                }
                debug!(requirement = %req, header = %header, "requirement id clashes with index column, renamed");
            }
            (req.as_str(), header)
        })
        .collect()
}

/// One row object per distinct test code: the index column first, then one
/// column per distinct requirement id.
pub fn matrix_sheet(report: &CoverageReport, config: &CoverageConfig) -> Value {
    let index = config.tests.code_column.as_str();
    let headers = requirement_headers(report.matrix.requirements(), index);

    let rows: Vec<Value> = report
        .matrix
        .tests()
        .iter()
        .map(|test| {
            let mut row = Map::new();
            row.insert(index.to_string(), Value::String(test.clone()));
            for (req, header) in &headers {
                let mark = report.matrix.mark(test, req).unwrap_or_default();
                row.insert(header.clone(), Value::String(config.marks.symbol(mark).to_string()));
            }
            Value::Object(row)
        })
        .collect();

    let mut doc = Map::new();
    doc.insert(config.export.sheet.clone(), Value::Array(rows));
    Value::Object(doc)
}

pub fn to_toon(report: &CoverageReport, config: &CoverageConfig) -> Result<String, RenderError> {
    toon_format::encode_default(&matrix_sheet(report, config)).map_err(|e| RenderError::Toon(e.to_string()))
}

pub fn to_json(report: &CoverageReport, config: &CoverageConfig) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(&matrix_sheet(report, config))?)
}
