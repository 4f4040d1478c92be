//! Error types for optimization operations.

use std::fmt;

/// Result type for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur during optimization.
#[derive(Debug, Clone)]
pub enum OptimizeError {
    /// The solver did not converge within the maximum iterations.
    DidNotConverge {
        iterations: usize,
        tolerance: f64,
        context: String,
    },

    /// Invalid interval provided (e.g., for bracketing methods).
    InvalidInterval { a: f64, b: f64, context: String },

    /// The objective returned NaN inside the bracket.
    NumericalError { message: String },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DidNotConverge {
                iterations,
                tolerance,
                context,
            } => {
                write!(
                    f,
                    "{}: did not converge after {} iterations (tolerance: {})",
                    context, iterations, tolerance
                )
            }
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must satisfy a < b",
                    a, b, context
                )
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
        }
    }
}

impl std::error::Error for OptimizeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_context() {
        let err = OptimizeError::InvalidInterval {
            a: 5.0,
            b: -5.0,
            context: "boxcox".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("[5, -5]"));
        assert!(msg.contains("boxcox"));
    }
}
