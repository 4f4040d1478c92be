//! Chi-squared distribution.

use super::special;
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{StatsError, StatsResult};

/// Chi-squared distribution with k degrees of freedom.
///
/// χ²(k) = Gamma(k/2, scale 2), so the CDF is the regularized lower incomplete
/// gamma function P(k/2, x/2). Bartlett's statistic is referred to χ²(groups - 1).
#[derive(Debug, Clone, Copy)]
pub struct ChiSquared {
    /// Degrees of freedom
    k: f64,
}

impl ChiSquared {
    /// Create a new chi-squared distribution with k degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns an error if k is zero.
    pub fn new(k: u64) -> StatsResult<Self> {
        if k == 0 {
            return Err(StatsError::InvalidParameter {
                name: "k".to_string(),
                value: 0.0,
                reason: "degrees of freedom must be positive".to_string(),
            });
        }
        Ok(Self { k: k as f64 })
    }

    /// Get the degrees of freedom.
    pub fn df(&self) -> f64 {
        self.k
    }
}

impl ContinuousDistribution for ChiSquared {
    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        special::gammainc(self.k / 2.0, x / 2.0)
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        special::gammaincc(self.k / 2.0, x / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chi_squared_creation() {
        let chi2 = ChiSquared::new(5).unwrap();
        assert!((chi2.df() - 5.0).abs() < 1e-10);
        assert!(ChiSquared::new(0).is_err());
    }

    #[test]
    fn test_chi_squared_cdf() {
        let chi2 = ChiSquared::new(1).unwrap();
        // For χ²(1), CDF(1) = 2Φ(1) - 1 ≈ 0.6827
        assert!((chi2.cdf(1.0) - 0.6826894921370859).abs() < 1e-6);

        let chi2 = ChiSquared::new(2).unwrap();
        // χ²(2) is exponential with rate 1/2
        assert!((chi2.cdf(2.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-6);
        assert!((chi2.sf(2.0) - (-1.0_f64).exp()).abs() < 1e-6);
    }

    #[test]
    fn test_chi_squared_critical_value() {
        let chi2 = ChiSquared::new(1).unwrap();
        // χ²(1, 0.95) ≈ 3.841
        assert!((chi2.cdf(3.841458820694124) - 0.95).abs() < 1e-6);
        assert!((chi2.sf(3.841458820694124) - 0.05).abs() < 1e-6);
    }
}
