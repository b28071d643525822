// torchlet-core/src/ops/arithmetic/sub.rs

use crate::error::TorchletError;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::{Operand, Value};

/// Subtraction, built as `a + (-b)`.
///
/// A literal `b` is negated as a number before being wrapped, so only a
/// `Value` operand gets a negation node of its own.
pub fn sub_op(a: &Value, b: impl Into<Operand>) -> Result<Value, TorchletError> {
    match b.into() {
        Operand::Value(b) => add_op(a, &neg_op(&b)?),
        Operand::Scalar(k) => add_op(a, -k),
        Operand::Array(ks) => add_op(a, ks.into_iter().map(|k| -k).collect::<Vec<f64>>()),
    }
}

/// Subtraction with the value on the right-hand side (`k - a`), built as
/// `(-a) + k`.
pub fn rsub_op(k: impl Into<Operand>, a: &Value) -> Result<Value, TorchletError> {
    add_op(&neg_op(a)?, k)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
