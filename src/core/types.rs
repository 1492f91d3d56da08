// identifiers + cell marks shared by the whole crate
use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequirementId = String;
pub type TestCode = String;

/// Default header of the requirement identifier column.
pub const REQUIREMENT_ID_COLUMN: &str = "ID";
/// Default header of the free-text "covered by" column.
pub const COVERED_BY_COLUMN: &str = "Cubierto por";
/// Default header of the test code column, also used as the index label on export.
pub const TEST_CODE_COLUMN: &str = "Código de Prueba";

/// State of a single (test, requirement) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Uncovered,
    Covered,
}

impl Mark {
    pub fn is_covered(self) -> bool {
        matches!(self, Mark::Covered)
    }

    //default sentinel symbols: "X" covered, "" uncovered
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Covered => "X",
            Mark::Uncovered => "",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which of the two input registers a document plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentRole {
    Requirements,
    TestResults,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Requirements => write!(f, "requirements"),
            DocumentRole::TestResults => write!(f, "test-results"),
        }
    }
}
