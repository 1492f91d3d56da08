// schema probe + identifier extraction
use tracing::debug;

use crate::core::table::Table;
use crate::core::types::{COVERED_BY_COLUMN, REQUIREMENT_ID_COLUMN, TEST_CODE_COLUMN};

/// Header names the builder reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub requirement_id: String,
    pub covered_by: String,
    pub test_code: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            requirement_id: REQUIREMENT_ID_COLUMN.to_string(),
            covered_by: COVERED_BY_COLUMN.to_string(),
            test_code: TEST_CODE_COLUMN.to_string(),
        }
    }
}

/// Resolved column positions of the requirements table. `None` = column absent,
/// which reads as an empty column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementSchema {
    pub id: Option<usize>,
    pub covered_by: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestSchema {
    pub code: Option<usize>,
}

fn probe(table: &Table, name: &str) -> Option<usize> {
    let idx = table.column_index(name);
    if idx.is_none() {
        debug!(column = name, available = ?table.columns(), "column absent, treating as empty");
    }
    idx
}

impl RequirementSchema {
    pub fn probe(table: &Table, columns: &Columns) -> Self {
        Self {
            id: probe(table, &columns.requirement_id),
            covered_by: probe(table, &columns.covered_by),
        }
    }
}

impl TestSchema {
    pub fn probe(table: &Table, columns: &Columns) -> Self {
        Self {
            code: probe(table, &columns.test_code),
        }
    }
}

/// Trimmed identifier, or `None` for a missing or blank cell.
pub fn normalize_identifier(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Identifiers of one column in row order, duplicates kept, missing cells dropped.
pub fn identifiers(table: &Table, column: Option<usize>) -> Vec<String> {
    table
        .column_values(column)
        .into_iter()
        .filter_map(normalize_identifier)
        .collect()
}
