// torchlet-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::TorchletError;
use crate::value::{Operand, Value};

/// Raises every element of `base` to a plain numeric `exponent`.
///
/// The gradient rule is `p * x^(p-1) * grad`. Zero bases with exponents below
/// one yield infinities or NaN; these are not trapped.
///
/// # Errors
/// `UnsupportedOperandKind` if `exponent` is a `Value` or an array.
pub fn pow_op(base: &Value, exponent: impl Into<Operand>) -> Result<Value, TorchletError> {
    let p = match exponent.into() {
        Operand::Scalar(p) => p,
        other => {
            return Err(TorchletError::UnsupportedOperandKind {
                operation: "pow".to_string(),
                operand: format!("exponent must be an int or float, got {}", other.kind()),
            })
        }
    };
    let data = base.data().map(|x| x.powf(p));
    Ok(Value::from_op(
        data,
        BackwardOp::Pow {
            base: base.clone(),
            exponent: p,
        },
    ))
}

impl Value {
    /// See [`pow_op`].
    pub fn pow(&self, exponent: impl Into<Operand>) -> Result<Value, TorchletError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
