//! Distribution trait shared by the scalar distributions.

/// A continuous univariate distribution evaluated on scalars.
pub trait ContinuousDistribution {
    /// Cumulative distribution function P(X <= x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }
}
