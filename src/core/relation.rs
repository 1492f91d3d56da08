// coverage relation: "covered by" parsing + marking cells
use crate::core::error::MatrixError;
use crate::core::matrix::CoverageMatrix;
use crate::core::types::{Mark, RequirementId, TestCode};

/// Split a "covered by" field into trimmed test tokens.
///
/// A missing, blank or whitespace-only field covers nothing. Empty tokens left by
/// stray commas (`"TC-1,,TC-2,"`) are dropped.
pub fn covered_by_tokens(field: Option<&str>) -> Vec<&str> {
    let Some(raw) = field.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

impl CoverageMatrix {
    //the two lookups required before a cell may be marked
    fn expect_test(&self, test: &str) -> Result<(), MatrixError> {
        if !self.cells.contains_key(test) {
            return Err(MatrixError::UnknownTest(test.to_string()));
        }
        Ok(())
    }

    fn expect_requirement(&self, test: &str, requirement: &str) -> Result<(), MatrixError> {
        let known = self
            .cells
            .get(test)
            .is_some_and(|row| row.contains_key(requirement));
        if !known {
            return Err(MatrixError::UnknownRequirement {
                test: test.to_string(),
                requirement: requirement.to_string(),
            });
        }
        Ok(())
    }

    /// Mark (test, requirement) as covered. Idempotent.
    ///
    /// Never inserts keys: an unknown test or requirement is reported as an error
    /// and the matrix is left untouched.
    pub fn mark_covered(&mut self, test: &str, requirement: &str) -> Result<(), MatrixError> {
        self.expect_test(test)?;
        self.expect_requirement(test, requirement)?;

        if let Some(mark) = self.cells.get_mut(test).and_then(|row| row.get_mut(requirement)) {
            *mark = Mark::Covered;
        }
        Ok(())
    }

    pub fn covered_count(&self) -> usize {
        self.cells
            .values()
            .flat_map(|row| row.values())
            .filter(|m| m.is_covered())
            .count()
    }

    /// Requirements no test covers, in requirement order.
    pub fn uncovered_requirements(&self) -> Vec<&RequirementId> {
        self.requirement_order
            .iter()
            .filter(|req| {
                !self
                    .cells
                    .values()
                    .any(|row| row.get(req.as_str()).is_some_and(|m| m.is_covered()))
            })
            .collect()
    }

    /// Tests whose whole row is uncovered, in test order.
    pub fn idle_tests(&self) -> Vec<&TestCode> {
        self.test_order
            .iter()
            .filter(|test| {
                self.cells
                    .get(test.as_str())
                    .is_none_or(|row| !row.values().any(|m| m.is_covered()))
            })
            .collect()
    }

    /// Tests marked against one requirement, in test order.
    pub fn covering_tests(&self, requirement: &str) -> Vec<&TestCode> {
        self.test_order
            .iter()
            .filter(|test| self.mark(test, requirement) == Some(Mark::Covered))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_matrix(tests: &[&str], reqs: &[&str]) -> CoverageMatrix {
        let tests: Vec<String> = tests.iter().map(|s| s.to_string()).collect();
        let reqs: Vec<String> = reqs.iter().map(|s| s.to_string()).collect();
        CoverageMatrix::new(&tests, &reqs)
    }

    #[test]
    fn tokens_are_trimmed_and_blank_fields_cover_nothing() {
        assert_eq!(covered_by_tokens(Some("TC-1, TC-2")), vec!["TC-1", "TC-2"]);
        assert_eq!(covered_by_tokens(Some("  TC-1  ,TC-2 ")), vec!["TC-1", "TC-2"]);
        assert_eq!(covered_by_tokens(Some("TC-1,,TC-2,")), vec!["TC-1", "TC-2"]);
        assert!(covered_by_tokens(Some("")).is_empty());
        assert!(covered_by_tokens(Some("   ")).is_empty());
        assert!(covered_by_tokens(None).is_empty());
    }

    #[test]
    fn nan_text_is_just_an_unknown_token() {
        //no magic sentinel: a literal "nan" is a token like any other
        assert_eq!(covered_by_tokens(Some("nan")), vec!["nan"]);
    }

    #[test]
    fn mark_covered_sets_only_the_target_cell() {
        let mut m = mk_matrix(&["TC-1", "TC-2"], &["REQ-1", "REQ-2"]);
        m.mark_covered("TC-1", "REQ-2").unwrap();

        assert_eq!(m.mark("TC-1", "REQ-2"), Some(Mark::Covered));
        assert_eq!(m.mark("TC-1", "REQ-1"), Some(Mark::Uncovered));
        assert_eq!(m.mark("TC-2", "REQ-2"), Some(Mark::Uncovered));
        assert_eq!(m.covered_count(), 1);

        //idempotent
        m.mark_covered("TC-1", "REQ-2").unwrap();
        assert_eq!(m.covered_count(), 1);
    }

    #[test]
    fn mark_covered_rejects_unknown_keys_without_inserting() {
        let mut m = mk_matrix(&["TC-1"], &["REQ-1"]);
        let before = m.clone();

        let err = m.mark_covered("TC-9", "REQ-1").unwrap_err();
        assert_eq!(err, MatrixError::UnknownTest("TC-9".to_string()));

        let err = m.mark_covered("TC-1", "").unwrap_err();
        match err {
            MatrixError::UnknownRequirement { test, requirement } => {
                assert_eq!(test, "TC-1");
                assert_eq!(requirement, "");
            }
            other => panic!("unexpected error: {}", other),
        }

        assert_eq!(m, before);
        assert!(!m.contains_test("TC-9"));
    }

    #[test]
    fn summary_queries_follow_list_order() {
        let mut m = mk_matrix(&["TC-1", "TC-2", "TC-3"], &["REQ-1", "REQ-2", "REQ-3"]);
        m.mark_covered("TC-1", "REQ-1").unwrap();
        m.mark_covered("TC-3", "REQ-1").unwrap();
        m.mark_covered("TC-3", "REQ-3").unwrap();

        assert_eq!(m.uncovered_requirements(), vec!["REQ-2"]);
        assert_eq!(m.idle_tests(), vec!["TC-2"]);
        assert_eq!(m.covering_tests("REQ-1"), vec!["TC-1", "TC-3"]);
        assert!(m.covering_tests("REQ-9").is_empty());
    }
}
