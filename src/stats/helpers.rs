//! Generic helper functions for statistics implementations.
//!
//! These helpers work with any numr Runtime.

use numr::dtype::DType;
use numr::error::{Error, Result};
use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Extract a scalar f64 from a 0-D or 1-element tensor.
///
/// Works with any Runtime backend.
pub fn extract_scalar<R: Runtime>(t: &Tensor<R>) -> Result<f64> {
    if t.numel() != 1 {
        return Err(Error::InvalidArgument {
            arg: "tensor",
            reason: format!("expected scalar (1 element), got {} elements", t.numel()),
        });
    }

    let t = t.contiguous();
    match t.dtype() {
        DType::F32 => {
            let data: Vec<f32> = t.to_vec();
            Ok(data[0] as f64)
        }
        DType::F64 => {
            let data: Vec<f64> = t.to_vec();
            Ok(data[0])
        }
        dtype => Err(Error::UnsupportedDType {
            dtype,
            op: "extract_scalar",
        }),
    }
}

/// Copy a floating-point tensor to the host as `f64` values.
pub fn extract_values<R: Runtime>(t: &Tensor<R>) -> Result<Vec<f64>> {
    let t = t.contiguous();
    match t.dtype() {
        DType::F32 => {
            let data: Vec<f32> = t.to_vec();
            Ok(data.into_iter().map(f64::from).collect())
        }
        DType::F64 => Ok(t.to_vec()),
        dtype => Err(Error::UnsupportedDType {
            dtype,
            op: "extract_values",
        }),
    }
}

/// Upload a host sample as a 1-D F64 tensor on the client's device.
pub fn sample_tensor<R, C>(client: &C, values: &[f64]) -> Tensor<R>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    Tensor::<R>::from_slice(values, &[values.len()], client.device())
}

/// Reject tensors with any value <= 0 (or NaN).
///
/// `context` names the operation in the error message.
pub fn require_positive<R, C>(client: &C, x: &Tensor<R>, context: &str) -> Result<()>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    if x.numel() == 0 {
        return Err(Error::InvalidArgument {
            arg: "x",
            reason: format!("{} requires a non-empty sample", context),
        });
    }
    let x_contig = x.contiguous();
    let all_dims: Vec<usize> = (0..x_contig.ndim()).collect();
    let min_val = extract_scalar(&client.min(&x_contig, &all_dims, false)?)?;
    if min_val > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            arg: "x",
            reason: format!(
                "{} requires strictly positive data, found {}",
                context, min_val
            ),
        })
    }
}
