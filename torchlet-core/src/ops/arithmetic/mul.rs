// torchlet-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::TorchletError;
use crate::value::{Operand, Value};

/// Elementwise multiplication `a * b`.
///
/// During backward, `a` receives `b.data * grad` and `b` receives
/// `a.data * grad`.
///
/// # Errors
/// `ShapeMismatch` if both operands are arrays of different lengths.
pub fn mul_op(a: &Value, b: impl Into<Operand>) -> Result<Value, TorchletError> {
    let rhs = b.into().into_value();
    let data = a.data().zip_with(&rhs.data(), |x, y| x * y, "mul")?;
    Ok(Value::from_op(
        data,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs,
        },
    ))
}

/// Multiplication with the value on the right-hand side (`k * a`).
pub fn rmul_op(k: impl Into<Operand>, a: &Value) -> Result<Value, TorchletError> {
    mul_op(a, k)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
