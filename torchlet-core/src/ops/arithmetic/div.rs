// torchlet-core/src/ops/arithmetic/div.rs

use crate::error::TorchletError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::{Operand, Value};

/// Division, built as `a * b^-1`.
///
/// A literal divisor is inverted as a number (`a * (1/k)`). Division by zero
/// is not trapped and produces infinities or NaN.
pub fn div_op(a: &Value, b: impl Into<Operand>) -> Result<Value, TorchletError> {
    match b.into() {
        Operand::Value(b) => mul_op(a, &pow_op(&b, -1.0)?),
        Operand::Scalar(k) => mul_op(a, k.powi(-1)),
        Operand::Array(ks) => mul_op(a, ks.into_iter().map(|k| k.powi(-1)).collect::<Vec<f64>>()),
    }
}

/// Division with the value on the right-hand side (`k / a`), built as
/// `a^-1 * k`.
pub fn rdiv_op(k: impl Into<Operand>, a: &Value) -> Result<Value, TorchletError> {
    mul_op(&pow_op(a, -1.0)?, k)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
