// matrix derivation: identifiers -> initialized matrix -> coverage relation
use serde::Serialize;
use tracing::{debug, info};

use crate::core::extract::{Columns, RequirementSchema, TestSchema, identifiers};
use crate::core::matrix::CoverageMatrix;
use crate::core::relation::covered_by_tokens;
use crate::core::table::Table;
use crate::core::types::{RequirementId, TestCode};

/// A "covered by" token that matched nothing. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Zero-based row of the requirements table.
    pub row: usize,
    pub requirement: RequirementId,
    pub token: String,
}

/// Result of one build: both identifier lists plus the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub requirement_ids: Vec<RequirementId>,
    pub test_codes: Vec<TestCode>,
    pub matrix: CoverageMatrix,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dangling: Vec<DanglingReference>,
}

impl CoverageReport {
    pub fn into_parts(self) -> (Vec<RequirementId>, Vec<TestCode>, CoverageMatrix) {
        (self.requirement_ids, self.test_codes, self.matrix)
    }
}

/// Build the coverage matrix from two already-parsed tables.
///
/// Infallible: absent columns read as empty, and blank or dangling coverage entries
/// are skipped. Inputs are only borrowed.
pub fn build_matrix(requirements: &Table, tests: &Table, columns: &Columns) -> CoverageReport {
    let req_schema = RequirementSchema::probe(requirements, columns);
    let test_schema = TestSchema::probe(tests, columns);

    //1) identifiers
    let requirement_ids = identifiers(requirements, req_schema.id);
    let test_codes = identifiers(tests, test_schema.code);

    //2) rectangular, all uncovered
    let mut matrix = CoverageMatrix::new(&test_codes, &requirement_ids);

    //3) relation
    let mut dangling = Vec::new();
    for row in 0..requirements.len() {
        //a missing id still gets looked up (as "") and simply never matches
        let requirement = requirements
            .cell(row, req_schema.id)
            .map(str::trim)
            .unwrap_or_default();

        let tokens = covered_by_tokens(requirements.cell(row, req_schema.covered_by));
        if tokens.is_empty() {
            continue;
        }

        for token in tokens {
            if let Err(err) = matrix.mark_covered(token, requirement) {
                debug!(row, requirement, token, reason = %err, "ignoring dangling coverage reference");
                dangling.push(DanglingReference {
                    row,
                    requirement: requirement.to_string(),
                    token: token.to_string(),
                });
            }
        }
    }

    info!(
        requirements = requirement_ids.len(),
        tests = test_codes.len(),
        covered = matrix.covered_count(),
        dangling = dangling.len(),
        "coverage matrix built"
    );

    CoverageReport { requirement_ids, test_codes, matrix, dangling }
}
