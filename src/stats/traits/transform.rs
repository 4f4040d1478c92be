//! Normalizing power transforms.

use super::BoxCoxResult;
use numr::error::Result;
use numr::ops::TensorOps;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Power transforms that pull right-skewed samples toward normality.
///
/// Both transforms require strictly positive input and return
/// `Error::InvalidArgument` otherwise.
pub trait PowerTransformAlgorithms<R: Runtime>: TensorOps<R> {
    /// Natural logarithm of every element.
    fn log_transform(&self, x: &Tensor<R>) -> Result<Tensor<R>>;

    /// Box-Cox transform with λ fitted by maximum likelihood.
    fn boxcox(&self, x: &Tensor<R>) -> Result<BoxCoxResult<R>>;

    /// Box-Cox transform with a given λ:
    /// `(x^λ - 1) / λ` for λ ≠ 0, `ln(x)` for λ = 0.
    fn boxcox_with_lambda(&self, x: &Tensor<R>, lambda: f64) -> Result<Tensor<R>>;
}
