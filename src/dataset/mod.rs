//! Survey dataset: loading and category grouping.
//!
//! The dataset is read once and never mutated. Grouping helpers return fresh
//! vectors so every analysis works on its own copy of the samples.

mod variable;

pub use variable::{SALARY_COLUMN, Variable};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{DashboardError, Result};

/// One survey response.
///
/// Empty cells are `None`; a salary that does not parse as a finite number is
/// also `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SurveyRecord {
    #[serde(rename = "Cargo")]
    pub role: Option<String>,
    #[serde(rename = "Carreira")]
    pub career_stage: Option<String>,
    #[serde(rename = "Genero")]
    pub gender: Option<String>,
    #[serde(rename = "Raça")]
    pub race: Option<String>,
    #[serde(rename = "Experiencia")]
    pub experience: Option<String>,
    #[serde(rename = "Faixa salarial", deserialize_with = "csv::invalid_option")]
    pub salary: Option<f64>,
}

impl SurveyRecord {
    /// Value of `variable` for this record, `None` when missing.
    pub fn category(&self, variable: Variable) -> Option<&str> {
        let value = match variable {
            Variable::Role => &self.role,
            Variable::CareerStage => &self.career_stage,
            Variable::Gender => &self.gender,
            Variable::Race => &self.race,
            Variable::Experience => &self.experience,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Salary if present and finite.
    pub fn salary(&self) -> Option<f64> {
        self.salary.filter(|s| s.is_finite())
    }
}

/// Rows sharing one value of a variable, with null salaries removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub salaries: Vec<f64>,
}

/// Immutable table of survey records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SurveyRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<SurveyRecord>) -> Self {
        Self { records }
    }

    /// Parse comma-delimited UTF-8 text with a header row.
    ///
    /// The header must contain the five categorical columns and
    /// [`SALARY_COLUMN`]; other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let required = Variable::ALL
            .iter()
            .map(|v| v.column())
            .chain(std::iter::once(SALARY_COLUMN));
        for column in required {
            if !headers.iter().any(|h| h == column) {
                return Err(DashboardError::MissingColumn(column.to_string()));
            }
        }

        let records = reader
            .deserialize::<SurveyRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(rows = records.len(), "parsed survey records");
        Ok(Self { records })
    }

    /// Load the dataset from a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DashboardError::data_access(path, e))?;
        let dataset = Self::from_reader(file)?;
        info!(path = %path.display(), rows = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SurveyRecord] {
        &self.records
    }

    /// Distinct non-null values of `variable` in first-encounter order.
    pub fn categories(&self, variable: Variable) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for value in self.records.iter().filter_map(|r| r.category(variable)) {
            if !seen.iter().any(|s| s == value) {
                seen.push(value.to_string());
            }
        }
        seen
    }

    /// Non-null salaries of the rows where `variable == category`.
    pub fn salaries(&self, variable: Variable, category: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.category(variable) == Some(category))
            .filter_map(SurveyRecord::salary)
            .collect()
    }

    /// One group per category, first-encounter order. Groups may be empty.
    pub fn groups(&self, variable: Variable) -> Vec<CategoryGroup> {
        self.categories(variable)
            .into_iter()
            .map(|category| {
                let salaries = self.salaries(variable, &category);
                CategoryGroup { category, salaries }
            })
            .collect()
    }
}
