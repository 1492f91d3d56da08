// rectangular test x requirement matrix
use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::types::{Mark, RequirementId, TestCode};

/// Coverage matrix keyed by test code, then requirement id.
///
/// Keys keep first-seen order of the identifier lists it was built from.
/// Repeated identifiers collapse into a single key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageMatrix {
    pub(crate) test_order: Vec<TestCode>,
    pub(crate) requirement_order: Vec<RequirementId>,
    pub(crate) cells: HashMap<TestCode, HashMap<RequirementId, Mark>>,
}

fn distinct_in_order(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

impl CoverageMatrix {
    /// Every (test, requirement) cell starts uncovered.
    pub fn new(test_codes: &[TestCode], requirement_ids: &[RequirementId]) -> Self {
        let test_order = distinct_in_order(test_codes);
        let requirement_order = distinct_in_order(requirement_ids);

        let cells = test_order
            .iter()
            .map(|test| {
                let row = requirement_order
                    .iter()
                    .map(|req| (req.clone(), Mark::Uncovered))
                    .collect();
                (test.clone(), row)
            })
            .collect();

        Self { test_order, requirement_order, cells }
    }

    pub fn tests(&self) -> &[TestCode] {
        &self.test_order
    }

    pub fn requirements(&self) -> &[RequirementId] {
        &self.requirement_order
    }

    pub fn test_count(&self) -> usize {
        self.test_order.len()
    }

    pub fn requirement_count(&self) -> usize {
        self.requirement_order.len()
    }

    pub fn contains_test(&self, test: &str) -> bool {
        self.cells.contains_key(test)
    }

    //Some(mark) for every listed pair, None only for unknown test/requirement
    pub fn mark(&self, test: &str, requirement: &str) -> Option<Mark> {
        self.cells.get(test)?.get(requirement).copied()
    }

    pub fn row(&self, test: &str) -> Option<&HashMap<RequirementId, Mark>> {
        self.cells.get(test)
    }

    /// One test's marks in requirement order.
    pub fn row_marks(&self, test: &str) -> Option<Vec<(&str, Mark)>> {
        let row = self.cells.get(test)?;
        Some(
            self.requirement_order
                .iter()
                .map(|req| (req.as_str(), row.get(req).copied().unwrap_or_default()))
                .collect(),
        )
    }

    pub fn cell_count(&self) -> usize {
        self.cells.values().map(HashMap::len).sum()
    }
}

//serialize as {test: {requirement: symbol}} in key order
struct OrderedRow<'a> {
    order: &'a [RequirementId],
    row: &'a HashMap<RequirementId, Mark>,
}

impl Serialize for OrderedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for req in self.order {
            let mark = self.row.get(req).copied().unwrap_or_default();
            map.serialize_entry(req, mark.symbol())?;
        }
        map.end()
    }
}

impl Serialize for CoverageMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.test_order.len()))?;
        for test in &self.test_order {
            if let Some(row) = self.cells.get(test) {
                map.serialize_entry(test, &OrderedRow { order: &self.requirement_order, row })?;
            }
        }
        map.end()
    }
}
