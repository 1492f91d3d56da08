// stateless entry points: two registers in, one report out
use std::path::Path;

use tracing::{info_span, warn};

use crate::config::CoverageConfig;
use crate::core::builder::{CoverageReport, build_matrix};
use crate::core::error::MalformedInputError;
use crate::core::table::Table;
use crate::core::types::DocumentRole;
use crate::loader::{DocumentFormat, parse_table, read_table};

/// Build from two parsed tables with the configured column layout.
pub fn build_from_tables(requirements: &Table, tests: &Table, config: &CoverageConfig) -> CoverageReport {
    build_matrix(requirements, tests, &config.columns())
}

/// Build from two in-memory documents.
///
/// All-or-nothing: if either document fails to load no report is produced.
pub fn build_from_documents(
    requirements: (&str, DocumentFormat),
    tests: (&str, DocumentFormat),
    config: &CoverageConfig,
) -> Result<CoverageReport, MalformedInputError> {
    let req_table = parse_table(
        requirements.0,
        requirements.1,
        config.requirements_sheet(),
        DocumentRole::Requirements,
    )?;
    let test_table = parse_table(tests.0, tests.1, config.tests_sheet(), DocumentRole::TestResults)?;
    Ok(build_from_tables(&req_table, &test_table, config))
}

/// Build from two register files.
pub fn build_from_paths(
    requirements: &Path,
    tests: &Path,
    config: &CoverageConfig,
) -> Result<CoverageReport, MalformedInputError> {
    let _span = info_span!("coverage", requirements = %requirements.display(), tests = %tests.display()).entered();

    let loaded = read_table(requirements, config.requirements_sheet(), DocumentRole::Requirements)
        .and_then(|req| {
            let tst = read_table(tests, config.tests_sheet(), DocumentRole::TestResults)?;
            Ok((req, tst))
        });

    match loaded {
        Ok((req_table, test_table)) => Ok(build_from_tables(&req_table, &test_table, config)),
        Err(err) => {
            warn!(error = %err, "register could not be loaded");
            Err(err)
        }
    }
}
