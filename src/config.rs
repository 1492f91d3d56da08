//! Register layout and output configuration.
//!
//! Every field has a default matching the standard register layout, so an
//! empty (or absent) config file is valid:
//!
//! ```toml
//! [requirements]
//! sheet = "Requisitos_de_Sistema"
//! id_column = "ID"
//! covered_by_column = "Cubierto por"
//!
//! [tests]
//! sheet = "Resultados_Pruebas"
//! code_column = "Código de Prueba"
//!
//! [marks]
//! covered = "X"
//! uncovered = ""
//!
//! [export]
//! sheet = "Matriz de Cobertura"
//! ```
//!
//! `sheet = ""` under `[requirements]` or `[tests]` reads whichever single sheet
//! the document holds.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::extract::Columns;
use crate::core::types::{COVERED_BY_COLUMN, Mark, REQUIREMENT_ID_COLUMN, TEST_CODE_COLUMN};

pub const REQUIREMENTS_SHEET: &str = "Requisitos_de_Sistema";
pub const TEST_RESULTS_SHEET: &str = "Resultados_Pruebas";
pub const EXPORT_SHEET: &str = "Matriz de Cobertura";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("covered and uncovered marks must differ (both are '{0}')")]
    IdenticalMarks(String),

    #[error("column name for {0} must not be empty")]
    EmptyColumnName(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsLayout {
    /// Sheet to read when the document holds several. An empty name accepts a
    /// document with a single sheet of any name. Bare tables are always accepted.
    pub sheet: Option<String>,
    pub id_column: String,
    pub covered_by_column: String,
}

impl Default for RequirementsLayout {
    fn default() -> Self {
        Self {
            sheet: Some(REQUIREMENTS_SHEET.to_string()),
            id_column: REQUIREMENT_ID_COLUMN.to_string(),
            covered_by_column: COVERED_BY_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestsLayout {
    /// Same rules as [`RequirementsLayout::sheet`].
    pub sheet: Option<String>,
    pub code_column: String,
}

impl Default for TestsLayout {
    fn default() -> Self {
        Self {
            sheet: Some(TEST_RESULTS_SHEET.to_string()),
            code_column: TEST_CODE_COLUMN.to_string(),
        }
    }
}

/// Cell symbols used by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkSymbols {
    pub covered: String,
    pub uncovered: String,
}

impl Default for MarkSymbols {
    fn default() -> Self {
        Self {
            covered: Mark::Covered.symbol().to_string(),
            uncovered: Mark::Uncovered.symbol().to_string(),
        }
    }
}

impl MarkSymbols {
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::Covered => &self.covered,
            Mark::Uncovered => &self.uncovered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportLayout {
    pub sheet: String,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self { sheet: EXPORT_SHEET.to_string() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub requirements: RequirementsLayout,
    pub tests: TestsLayout,
    pub marks: MarkSymbols,
    pub export: ExportLayout,
}

//blank name = any single sheet
fn sheet_name(sheet: &Option<String>) -> Option<&str> {
    sheet.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl CoverageConfig {
    /// Load from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given, using default register layout");
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("requirements.id_column", &self.requirements.id_column),
            ("requirements.covered_by_column", &self.requirements.covered_by_column),
            ("tests.code_column", &self.tests.code_column),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyColumnName(field));
            }
        }

        if self.marks.covered == self.marks.uncovered {
            return Err(ConfigError::IdenticalMarks(self.marks.covered.clone()));
        }
        Ok(())
    }

    pub fn requirements_sheet(&self) -> Option<&str> {
        sheet_name(&self.requirements.sheet)
    }

    pub fn tests_sheet(&self) -> Option<&str> {
        sheet_name(&self.tests.sheet)
    }

    pub fn columns(&self) -> Columns {
        Columns {
            requirement_id: self.requirements.id_column.clone(),
            covered_by: self.requirements.covered_by_column.clone(),
            test_code: self.tests.code_column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default_layout() {
        let config = CoverageConfig::from_toml("").unwrap();
        assert_eq!(config, CoverageConfig::default());
        assert_eq!(config.columns(), Columns::default());
        assert_eq!(config.requirements.sheet.as_deref(), Some(REQUIREMENTS_SHEET));
        assert_eq!(config.tests.sheet.as_deref(), Some(TEST_RESULTS_SHEET));
    }

    #[test]
    fn partial_toml_overrides_only_given_fields() {
        let config = CoverageConfig::from_toml(
            r#"
            [requirements]
            id_column = "Requirement"

            [marks]
            covered = "✔"
            "#,
        )
        .unwrap();

        assert_eq!(config.requirements.id_column, "Requirement");
        assert_eq!(config.requirements.covered_by_column, COVERED_BY_COLUMN);
        assert_eq!(config.marks.symbol(Mark::Covered), "✔");
        assert_eq!(config.marks.symbol(Mark::Uncovered), "");
    }

    #[test]
    fn blank_sheet_name_means_any_single_sheet() {
        let config = CoverageConfig::from_toml("[requirements]\nsheet = \"\"\n[tests]\nsheet = \"  \"\n").unwrap();
        assert_eq!(config.requirements_sheet(), None);
        assert_eq!(config.tests_sheet(), None);

        let defaults = CoverageConfig::default();
        assert_eq!(defaults.requirements_sheet(), Some(REQUIREMENTS_SHEET));
        assert_eq!(defaults.tests_sheet(), Some(TEST_RESULTS_SHEET));
    }

    #[test]
    fn identical_marks_are_rejected() {
        let err = CoverageConfig::from_toml(
            r#"
            [marks]
            covered = "-"
            uncovered = "-"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::IdenticalMarks(ref s) if s == "-"));
    }

    #[test]
    fn blank_column_name_is_rejected() {
        let err = CoverageConfig::from_toml("[tests]\ncode_column = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyColumnName("tests.code_column")));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = CoverageConfig::from_toml("[requirements\nid_column = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoverageConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(CoverageConfig::load(None).unwrap(), CoverageConfig::default());
    }
}
