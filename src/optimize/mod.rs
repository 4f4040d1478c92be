//! Optimization algorithms.
//!
//! Only univariate minimization is needed here: the Box-Cox transform picks
//! its λ by maximizing a profile log-likelihood.
//!
//! ```ignore
//! use salary_insights::optimize::scalar::{minimize_scalar_brent, ScalarOptions};
//!
//! let result = minimize_scalar_brent(|x| (x - 20.0).powi(2), Some((-2.0, 2.0)), &ScalarOptions::default())?;
//! assert!((result.x - 20.0).abs() < 1e-6);
//! ```

pub mod error;
pub mod scalar;

pub use error::{OptimizeError, OptimizeResult};
