// src/value/value_data.rs

use crate::autograd::BackwardOp;
use crate::value::Payload;
use std::mem;
use std::sync::Arc;

/// Internal storage and metadata for a `Value` node.
///
/// This struct is wrapped in `Arc<RwLock<ValueData>>` by `Value` to allow
/// shared ownership (every consumer node keeps its producers alive) and
/// interior mutability of the gradient.
#[derive(Debug)]
pub struct ValueData {
    /// Forward result. Its shape is fixed; `Value::set` may rewrite elements.
    pub(crate) data: Payload,
    /// Accumulated gradient, same shape as `data`.
    /// `None` until the backward pass (or `zero_grad`) materializes it.
    pub(crate) grad: Option<Payload>,
    /// The operation that produced this node, holding its operands.
    /// Leaf values carry `BackwardOp::Leaf`.
    pub(crate) grad_fn: BackwardOp,
    /// Optional display name, used by `Display` and the DOT renderer.
    pub(crate) label: Option<String>,
}

impl ValueData {
    pub(crate) fn new(data: Payload, grad_fn: BackwardOp) -> Self {
        ValueData {
            data,
            grad: None,
            grad_fn,
            label: None,
        }
    }

    /// Accumulates `contribution` into `grad`, materializing zeros first.
    pub(crate) fn accumulate_grad(&mut self, contribution: &Payload) {
        let ValueData { data, grad, .. } = self;
        grad.get_or_insert_with(|| data.zeros_like())
            .accumulate(contribution);
    }

    /// Accumulates `contribution` into a single gradient element.
    pub(crate) fn accumulate_grad_at(&mut self, index: usize, contribution: f64) {
        let ValueData { data, grad, .. } = self;
        grad.get_or_insert_with(|| data.zeros_like())
            .accumulate_at(index, contribution);
    }
}

impl Drop for ValueData {
    /// Frees the producer chain with an explicit work stack, so dropping a
    /// long chain (`loss = loss + term` in a loop) never recurses. A producer
    /// whose last handle is released here hands its operands to the stack and
    /// is then dropped as a leaf.
    fn drop(&mut self) {
        let mut pending = mem::replace(&mut self.grad_fn, BackwardOp::Leaf).into_inputs();
        while let Some(value) = pending.pop() {
            if let Ok(lock) = Arc::try_unwrap(value.node) {
                let mut data = lock.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
                pending.extend(mem::replace(&mut data.grad_fn, BackwardOp::Leaf).into_inputs());
            }
        }
    }
}
