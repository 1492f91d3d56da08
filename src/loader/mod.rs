//! Register loading: TOON / JSON documents into [`Table`]s.
//!
//! Inputs:
//!
//! - requirements register (rows with an id and a "covered by" field)
//! - test-results register (rows with a test code)
//!
//! A document is either a bare tabular array of row objects, or an object whose
//! keys are sheet names holding such arrays. Any failure here is structural and
//! reported as a [`MalformedInputError`].

mod sheet;

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::core::error::{InputCause, MalformedInputError};
use crate::core::table::Table;
use crate::core::types::DocumentRole;

pub use sheet::{select_sheet, table_from_rows};

/// Serialization of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toon,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, InputCause> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toon") => Ok(DocumentFormat::Toon),
            Some("json") => Ok(DocumentFormat::Json),
            _ => Err(InputCause::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn decode(self, text: &str) -> Result<Value, InputCause> {
        match self {
            DocumentFormat::Toon => toon_format::decode_default::<Value>(text)
                .map_err(|e| InputCause::Toon(e.to_string())),
            DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        }
    }
}

/// Parse document text into the table of the requested sheet.
pub fn parse_table(
    text: &str,
    format: DocumentFormat,
    sheet: Option<&str>,
    role: DocumentRole,
) -> Result<Table, MalformedInputError> {
    let wrap = |cause| MalformedInputError::new(role, cause);

    let document = format.decode(text).map_err(wrap)?;
    let rows = select_sheet(&document, sheet).map_err(wrap)?;
    let table = table_from_rows(rows).map_err(wrap)?;

    debug!(%role, ?sheet, columns = ?table.columns(), "parsed table");
    Ok(table)
}

/// Read a register file; the format follows the file extension.
pub fn read_table(
    path: &Path,
    sheet: Option<&str>,
    role: DocumentRole,
) -> Result<Table, MalformedInputError> {
    let format = DocumentFormat::from_path(path).map_err(|c| MalformedInputError::new(role, c))?;
    let text = std::fs::read_to_string(path).map_err(|source| {
        MalformedInputError::new(
            role,
            InputCause::Io {
                path: path.to_path_buf(),
                source,
            },
        )
    })?;

    let table = parse_table(&text, format, sheet, role)?;
    info!(%role, path = %path.display(), rows = table.len(), "loaded register");
    Ok(table)
}
