//! Continuous distributions used to turn test statistics into p-values.

mod chi_squared;
mod student_t;

pub use chi_squared::ChiSquared;
pub use student_t::StudentT;

/// Helper module for special functions used in distributions.
pub(crate) mod special {
    use numr::algorithm::special::scalar as numr_special;

    /// Complementary error function: erfc(x) = 1 - erf(x)
    pub fn erfc(x: f64) -> f64 {
        numr_special::erfc_scalar(x)
    }

    /// Inverse error function.
    pub fn erfinv(x: f64) -> f64 {
        numr_special::erfinv_scalar(x)
    }

    /// Standard normal CDF: Φ(x)
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Standard normal quantile function: Φ⁻¹(p)
    pub fn norm_ppf(p: f64) -> f64 {
        std::f64::consts::SQRT_2 * erfinv(2.0 * p - 1.0)
    }

    /// Regularized incomplete beta function: I_x(a, b)
    pub fn betainc(a: f64, b: f64, x: f64) -> f64 {
        numr_special::betainc_scalar(a, b, x)
    }

    /// Regularized lower incomplete gamma function: P(a, x)
    pub fn gammainc(a: f64, x: f64) -> f64 {
        numr_special::gammainc_scalar(a, x)
    }

    /// Regularized upper incomplete gamma function: Q(a, x) = 1 - P(a, x)
    pub fn gammaincc(a: f64, x: f64) -> f64 {
        numr_special::gammaincc_scalar(a, x)
    }
}
