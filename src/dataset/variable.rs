//! Categorical survey variables a user can analyse salaries by.

use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// CSV column holding the salary-bracket midpoint.
pub const SALARY_COLUMN: &str = "Faixa salarial";

/// A categorical attribute of a survey record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    Role,
    CareerStage,
    Gender,
    Race,
    Experience,
}

impl Variable {
    /// Every variable, in the order the selector lists them.
    pub const ALL: [Variable; 5] = [
        Variable::Role,
        Variable::CareerStage,
        Variable::Gender,
        Variable::Race,
        Variable::Experience,
    ];

    /// Header of the CSV column backing this variable.
    pub fn column(&self) -> &'static str {
        match self {
            Variable::Role => "Cargo",
            Variable::CareerStage => "Carreira",
            Variable::Gender => "Genero",
            Variable::Race => "Raça",
            Variable::Experience => "Experiencia",
        }
    }

    /// Name shown in titles and axis labels.
    pub fn label(&self) -> &'static str {
        self.column()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variable {
    type Err = DashboardError;

    /// Accepts the column label (case-insensitive) or the 1-based menu index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Variable::ALL.get(i).copied())
                .ok_or_else(|| DashboardError::InvalidInput(format!("no variable #{}", index)));
        }
        Variable::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(s) || v.label() == s)
            .ok_or_else(|| DashboardError::InvalidInput(format!("unknown variable '{}'", s)))
    }
}
