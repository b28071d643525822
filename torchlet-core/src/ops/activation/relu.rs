use crate::autograd::BackwardOp;
use crate::value::Value;

/// Applies the Rectified Linear Unit element-wise: `ReLU(x) = max(0, x)`.
///
/// NaN inputs stay NaN. The gradient passes through where the output is
/// positive and is zero elsewhere, including at exactly `x == 0` and at NaN.
pub fn relu_op(a: &Value) -> Value {
    let data = a.data().map(|x| if x < 0.0 { 0.0 } else { x });
    Value::from_op(data, BackwardOp::Relu { input: a.clone() })
}

impl Value {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
