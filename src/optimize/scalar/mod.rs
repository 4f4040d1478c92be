//! Scalar (1D) minimization algorithms.
//!
//! Golden section search narrows an interval [a, b] around the minimum of a
//! function `f: (f64) -> f64` assumed unimodal there. When no such interval
//! is known, one is grown from a starting pair first.

mod minimization;

pub use minimization::{bracket_minimum, minimize_scalar_brent, minimize_scalar_golden};

/// Options for scalar minimization.
#[derive(Debug, Clone)]
pub struct ScalarOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Absolute tolerance for convergence (width of interval)
    pub tol: f64,
    /// Relative tolerance for convergence (width of interval)
    pub rtol: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-12,
            rtol: 1e-12,
        }
    }
}

/// Result from a minimization method.
#[derive(Debug, Clone)]
pub struct MinimizeResult {
    /// The minimum point found
    pub x: f64,
    /// Function value at minimum
    pub f_min: f64,
    /// Number of iterations used
    pub iterations: usize,
    /// Final bracket width
    pub bracket_width: f64,
}
