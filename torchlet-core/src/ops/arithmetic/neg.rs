// torchlet-core/src/ops/arithmetic/neg.rs

use crate::error::TorchletError;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Negation, built as `a * -1`.
pub fn neg_op(a: &Value) -> Result<Value, TorchletError> {
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
