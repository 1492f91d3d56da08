// sheet selection + row objects -> Table
use serde_json::Value;

use crate::core::error::InputCause;
use crate::core::table::Table;

/// Pick the row array of a document.
///
/// A bare array is the only sheet and is returned whatever name was asked for.
/// For an object of sheets, a named sheet must exist; with no name the object must
/// hold exactly one sheet.
pub fn select_sheet<'a>(document: &'a Value, sheet: Option<&str>) -> Result<&'a [Value], InputCause> {
    match (document, sheet) {
        (Value::Array(rows), _) => Ok(rows.as_slice()),
        (Value::Object(sheets), Some(name)) => match sheets.get(name) {
            Some(Value::Array(rows)) => Ok(rows.as_slice()),
            Some(other) => Err(InputCause::NotTabular(format!(
                "sheet '{name}' is a {}, expected rows",
                kind(other)
            ))),
            None => Err(InputCause::MissingSheet(name.to_string())),
        },
        (Value::Object(sheets), None) => {
            let mut arrays = sheets.values().filter_map(Value::as_array);
            match (arrays.next(), arrays.next()) {
                (Some(rows), None) => Ok(rows.as_slice()),
                (None, _) => Err(InputCause::NotTabular("no sheet found".to_string())),
                (Some(_), Some(_)) => Err(InputCause::NotTabular(
                    "several sheets present, a sheet name is required".to_string(),
                )),
            }
        }
        (other, _) => Err(InputCause::NotTabular(format!("top-level {}", kind(other)))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//absence is decided on the value itself, before any stringification
fn scalar_cell(value: &Value) -> Option<Option<String>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) => Some(Some(s.clone())),
        Value::Number(n) => Some(Some(n.to_string())),
        Value::Bool(b) => Some(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Turn row objects into a [`Table`]. Columns are the union of row keys in
/// first-seen order; keys a row lacks read as missing cells.
pub fn table_from_rows(rows: &[Value]) -> Result<Table, InputCause> {
    let mut columns: Vec<String> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| InputCause::NotTabular(format!("row {idx} is a {}", kind(row))))?;
        for key in obj.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut table = Table::new(columns.clone());
    for (idx, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = match row.get(column) {
                None => None,
                Some(value) => scalar_cell(value).ok_or_else(|| InputCause::NonScalarCell {
                    row: idx,
                    column: column.clone(),
                })?,
            };
            cells.push(cell);
        }
        table.push_row(cells);
    }
    Ok(table)
}
