// torchlet-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::TorchletError;
use crate::value::{Operand, Value};

/// Elementwise addition `a + b`.
///
/// A literal `b` is wrapped into a leaf value first. Both operands receive the
/// output gradient unchanged during backward.
///
/// # Errors
/// `ShapeMismatch` if both operands are arrays of different lengths.
pub fn add_op(a: &Value, b: impl Into<Operand>) -> Result<Value, TorchletError> {
    let rhs = b.into().into_value();
    let data = a.data().zip_with(&rhs.data(), |x, y| x + y, "add")?;
    Ok(Value::from_op(
        data,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs,
        },
    ))
}

/// Addition with the value on the right-hand side (`k + a`).
///
/// Builds the same graph as `a + k`.
pub fn radd_op(k: impl Into<Operand>, a: &Value) -> Result<Value, TorchletError> {
    add_op(a, k)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
