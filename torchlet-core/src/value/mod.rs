// src/value/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::error::TorchletError;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod autograd_methods;
mod operand;
mod operators;
mod payload;
mod traits;
pub mod value_data;

pub use operand::Operand;
pub use payload::Payload;
pub use value_data::ValueData;

/// A node of the computation graph: a numeric payload plus its gradient.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** every node built from this value keeps it alive
///     as a producer; clones are cheap and refer to the same node.
/// 2.  **Interior Mutability:** the gradient is written by the backward pass
///     through an immutable handle.
///
/// A value is dropped once no caller handle and no consumer node refers to it.
pub struct Value {
    pub(crate) node: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a leaf value (no producers) from a scalar or an array.
    pub fn new(data: impl Into<Payload>) -> Self {
        Self::from_op(data.into(), BackwardOp::Leaf)
    }

    /// Creates a scalar leaf.
    pub fn scalar(x: f64) -> Self {
        Self::new(Payload::Scalar(x))
    }

    /// Creates an array leaf.
    pub fn array(xs: Vec<f64>) -> Self {
        Self::new(Payload::Array(xs))
    }

    /// Wraps the result of an operation into a new node.
    pub(crate) fn from_op(data: Payload, grad_fn: BackwardOp) -> Self {
        Value {
            node: Arc::new(RwLock::new(ValueData::new(data, grad_fn))),
        }
    }

    /// Acquires a read lock on the node.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> RwLockReadGuard<'_, ValueData> {
        self.node.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> RwLockWriteGuard<'_, ValueData> {
        self.node.write().expect("RwLock poisoned")
    }

    /// Stable identity of the node, shared by all clones of this handle.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.node)
    }

    /// True when both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    // --- Reflection (read-only) ---

    /// Returns a copy of the forward payload.
    pub fn data(&self) -> Payload {
        self.read_data().data.clone()
    }

    /// Returns the payload as a single number, or `None` for arrays.
    pub fn item(&self) -> Option<f64> {
        self.read_data().data.item()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.read_data().data.shape()
    }

    pub fn numel(&self) -> usize {
        self.read_data().data.numel()
    }

    /// The operands of the operation that produced this value, in operand order.
    pub fn producers(&self) -> Vec<Value> {
        self.read_data().grad_fn.inputs()
    }

    /// Label of the producing operation (`""` for leaves).
    pub fn op_tag(&self) -> String {
        self.read_data().grad_fn.tag()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.read_data().grad_fn, BackwardOp::Leaf)
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    /// Names the value for diagnostics. Has no computational effect.
    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Builder-style variant of [`Value::set_label`].
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Overwrites element `index` of an array payload in place.
    ///
    /// This is not a graph operation: no node is created and no gradient flows
    /// through the assignment. Nodes built from this value before the call
    /// keep the payload they were computed from.
    pub fn set(&self, index: usize, value: impl Into<Operand>) -> Result<(), TorchletError> {
        let x = match value.into() {
            Operand::Scalar(x) => x,
            Operand::Value(v) => v.item().ok_or_else(|| TorchletError::ShapeMismatch {
                expected: Vec::new(),
                actual: v.shape(),
                operation: "set".to_string(),
            })?,
            Operand::Array(xs) => {
                return Err(TorchletError::ShapeMismatch {
                    expected: Vec::new(),
                    actual: vec![xs.len()],
                    operation: "set".to_string(),
                })
            }
        };
        self.write_data().data.set(index, x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::scalar(x)
    }
}

impl From<Vec<f64>> for Value {
    fn from(xs: Vec<f64>) -> Self {
        Value::array(xs)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
