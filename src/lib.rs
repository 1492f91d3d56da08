//! Traceability matrix derivation.
//!
//! Takes a requirements register and a test-results register and derives, for
//! every (test, requirement) pair, whether the test covers the requirement
//! according to the requirement's "covered by" field.

pub mod config;
pub mod core;
pub mod loader;
pub mod render;
pub mod service;

pub use crate::config::CoverageConfig;
pub use crate::core::builder::{CoverageReport, DanglingReference, build_matrix};
pub use crate::core::error::{InputCause, MalformedInputError};
pub use crate::core::extract::Columns;
pub use crate::core::matrix::CoverageMatrix;
pub use crate::core::table::Table;
pub use crate::core::types::{DocumentRole, Mark};
pub use crate::service::{build_from_documents, build_from_paths, build_from_tables};
