//! Presentation helpers over a [`CoverageReport`](crate::CoverageReport).
//!
//! Rows are test codes, columns are requirement ids. Cell symbols come from
//! [`MarkSymbols`](crate::config::MarkSymbols).

pub mod html;
pub mod sheet;
pub mod summary;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("TOON encoding failed: {0}")]
    Toon(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
