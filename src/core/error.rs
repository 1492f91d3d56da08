use std::path::PathBuf;

use thiserror::Error;

use crate::core::types::{DocumentRole, RequirementId, TestCode};

/// Structural failure: a source document could not be turned into a table.
///
/// Carries the role of the offending document and the underlying cause. When
/// this is returned no identifier list and no matrix exist.
#[derive(Debug, Error)]
#[error("malformed {document} document: {cause}")]
pub struct MalformedInputError {
    pub document: DocumentRole,
    #[source]
    pub cause: InputCause,
}

impl MalformedInputError {
    pub fn new(document: DocumentRole, cause: InputCause) -> Self {
        Self { document, cause }
    }
}

#[derive(Debug, Error)]
pub enum InputCause {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("TOON decoding failed: {0}")]
    Toon(String),

    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sheet '{0}' not found")]
    MissingSheet(String),

    #[error("document is not tabular: {0}")]
    NotTabular(String),

    #[error("row {row}, column '{column}' holds a nested value")]
    NonScalarCell { row: usize, column: String },
}

/// Lookup failures while marking a cell. Never escapes the builder: a failed
/// lookup is a dangling reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("test code not in matrix: {0}")]
    UnknownTest(TestCode),

    #[error("requirement {requirement} not in row of test {test}")]
    UnknownRequirement {
        test: TestCode,
        requirement: RequirementId,
    },
}
