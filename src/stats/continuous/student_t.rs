//! Student's t distribution.

use super::special;
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{StatsError, StatsResult};

/// Student's t distribution with ν degrees of freedom.
///
/// The CDF is expressed through the regularized incomplete beta function
/// I_{ν/(ν+x²)}(ν/2, 1/2). ν need not be an integer; Welch's test produces
/// fractional degrees of freedom from the Welch-Satterthwaite approximation.
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    /// Degrees of freedom (ν)
    nu: f64,
}

impl StudentT {
    /// Create a new Student's t distribution with ν degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns an error if nu is not positive and finite.
    pub fn new(nu: f64) -> StatsResult<Self> {
        if nu <= 0.0 || nu.is_nan() {
            return Err(StatsError::InvalidParameter {
                name: "nu".to_string(),
                value: nu,
                reason: "degrees of freedom must be positive".to_string(),
            });
        }
        if !nu.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "nu".to_string(),
                value: nu,
                reason: "must be finite".to_string(),
            });
        }

        Ok(Self { nu })
    }

    /// Get the degrees of freedom.
    pub fn df(&self) -> f64 {
        self.nu
    }

    /// Two-sided p-value for an observed statistic: 2 · P(T > |t|).
    pub fn two_sided_pvalue(&self, t: f64) -> f64 {
        (2.0 * self.sf(t.abs())).min(1.0)
    }
}

impl ContinuousDistribution for StudentT {
    fn cdf(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.5;
        }

        // CDF(x) = 1 - 0.5 * I_{ν/(ν+x²)}(ν/2, 1/2) for x > 0
        // CDF(x) = 0.5 * I_{ν/(ν+x²)}(ν/2, 1/2) for x < 0
        let t = self.nu / (self.nu + x * x);
        let beta_inc = special::betainc(self.nu / 2.0, 0.5, t);

        if x > 0.0 {
            1.0 - 0.5 * beta_inc
        } else {
            0.5 * beta_inc
        }
    }

    fn sf(&self, x: f64) -> f64 {
        // Symmetry keeps the upper tail accurate: SF(x) = CDF(-x)
        self.cdf(-x)
    }
}
