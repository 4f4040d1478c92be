//! Scalar minimization algorithms.

use super::{MinimizeResult, ScalarOptions};
use crate::optimize::error::{OptimizeError, OptimizeResult};

/// Golden section search for minimization.
///
/// # Arguments
/// * `f` - Function to minimize
/// * `a` - Left bracket endpoint
/// * `b` - Right bracket endpoint
/// * `options` - Solver options
///
/// # Errors
/// * `InvalidInterval` if a >= b
/// * `NumericalError` if `f` returns NaN at an evaluated point
/// * `DidNotConverge` if iterations exceed max_iter
///
/// # Note
/// Linear convergence with ratio 0.618 and no derivatives. For a function
/// that is not unimodal on [a, b] it returns one of the local minima.
pub fn minimize_scalar_golden<F>(
    f: F,
    a: f64,
    b: f64,
    options: &ScalarOptions,
) -> OptimizeResult<MinimizeResult>
where
    F: Fn(f64) -> f64,
{
    if a >= b || !a.is_finite() || !b.is_finite() {
        return Err(OptimizeError::InvalidInterval {
            a,
            b,
            context: "minimize_scalar_golden".to_string(),
        });
    }

    let eval = |x: f64| -> OptimizeResult<f64> {
        let fx = f(x);
        if fx.is_nan() {
            Err(OptimizeError::NumericalError {
                message: format!("objective is NaN at x = {}", x),
            })
        } else {
            Ok(fx)
        }
    };

    // 1/phi = (sqrt(5) - 1) / 2
    let inv_phi = ((5.0_f64).sqrt() - 1.0) / 2.0;
    let inv_phi2 = 1.0 - inv_phi;

    let mut a = a;
    let mut b = b;

    let mut x1 = a + inv_phi2 * (b - a);
    let mut x2 = a + inv_phi * (b - a);
    let mut f1 = eval(x1)?;
    let mut f2 = eval(x2)?;

    for iter in 0..options.max_iter {
        let width = b - a;
        let tol_here = options
            .tol
            .max(options.rtol * (a.abs().max(b.abs()).max(1.0)));

        if width < tol_here {
            let x_min = 0.5 * (a + b);
            return Ok(MinimizeResult {
                x: x_min,
                f_min: eval(x_min)?,
                iterations: iter + 1,
                bracket_width: width,
            });
        }

        if f1 < f2 {
            // Minimum is in [a, x2]
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = a + inv_phi2 * (b - a);
            f1 = eval(x1)?;
        } else {
            // Minimum is in [x1, b]
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = a + inv_phi * (b - a);
            f2 = eval(x2)?;
        }
    }

    Err(OptimizeError::DidNotConverge {
        iterations: options.max_iter,
        tolerance: options.tol,
        context: "minimize_scalar_golden".to_string(),
    })
}

/// Golden ratio used to grow a bracket downhill.
const GROW: f64 = 1.618033988749895;

/// Find a bracket `(a, c)` whose interior holds a local minimum of `f`.
///
/// Starting from the pair `(xa, xb)`, steps downhill with golden-ratio
/// growth until the objective turns up again. The returned interval is
/// ordered, so it can be handed to [`minimize_scalar_golden`].
///
/// # Errors
/// * `InvalidInterval` if the starting points coincide or are not finite
/// * `NumericalError` if `f` returns NaN while growing
/// * `DidNotConverge` if the objective keeps decreasing for max_iter steps
pub fn bracket_minimum<F>(
    f: F,
    xa: f64,
    xb: f64,
    options: &ScalarOptions,
) -> OptimizeResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    if xa == xb || !xa.is_finite() || !xb.is_finite() {
        return Err(OptimizeError::InvalidInterval {
            a: xa,
            b: xb,
            context: "bracket_minimum".to_string(),
        });
    }

    let eval = |x: f64| -> OptimizeResult<f64> {
        let fx = f(x);
        if fx.is_nan() {
            Err(OptimizeError::NumericalError {
                message: format!("objective is NaN at x = {}", x),
            })
        } else {
            Ok(fx)
        }
    };

    let (mut a, mut b) = (xa, xb);
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;
    // Walk from a towards b, downhill
    if fa < fb {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = b + GROW * (b - a);
    let mut fc = eval(c)?;
    let mut steps = 0;
    while fc < fb {
        steps += 1;
        if steps > options.max_iter || !c.is_finite() {
            return Err(OptimizeError::DidNotConverge {
                iterations: steps,
                tolerance: options.tol,
                context: "bracket_minimum".to_string(),
            });
        }
        a = b;
        b = c;
        fb = fc;
        c = b + GROW * (b - a);
        fc = eval(c)?;
    }

    Ok((a.min(c), a.max(c)))
}

/// Unbounded scalar minimization.
///
/// Grows a bracket from `start` (default `(0, 1)`) with
/// [`bracket_minimum`], then narrows it with golden section search. Unlike
/// a bounded search the minimum may lie far outside the starting pair.
///
/// # Errors
/// * `InvalidInterval` if the starting points coincide
/// * `NumericalError` if `f` returns NaN at an evaluated point
/// * `DidNotConverge` if no bracket is found or the search exceeds max_iter
///
/// # Note
/// Named `minimize_scalar_brent` for SciPy compatibility. The narrowing step
/// is pure golden section search.
pub fn minimize_scalar_brent<F>(
    f: F,
    start: Option<(f64, f64)>,
    options: &ScalarOptions,
) -> OptimizeResult<MinimizeResult>
where
    F: Fn(f64) -> f64,
{
    let (xa, xb) = start.unwrap_or((0.0, 1.0));
    let (a, c) = bracket_minimum(&f, xa, xb, options)?;
    minimize_scalar_golden(&f, a, c, options)
}
