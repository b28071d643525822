// torchlet-core/src/ops/indexing.rs

use crate::autograd::BackwardOp;
use crate::error::TorchletError;
use crate::value::{Payload, Value};

/// Selects element `index` of an array value as a new scalar value.
///
/// During backward the output gradient flows into position `index` of
/// `a.grad`; every other position is left untouched.
///
/// # Errors
/// `IndexOutOfRange` if `a` is a scalar or `index >= len`.
pub fn index_op(a: &Value, index: usize) -> Result<Value, TorchletError> {
    let x = a.read_data().data.get(index)?;
    Ok(Value::from_op(
        Payload::Scalar(x),
        BackwardOp::Index {
            input: a.clone(),
            index,
        },
    ))
}

impl Value {
    /// See [`index_op`].
    pub fn index(&self, index: usize) -> Result<Value, TorchletError> {
        index_op(self, index)
    }
}
