//! # Reverse-mode automatic differentiation
//!
//! - [`backward_op`]: the `BackwardOp` enum recorded on every node and the
//!   gradient rule of each operation.
//! - [`graph`]: node identity, topological ordering and graph tracing.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//! - [`dot`]: Graphviz rendering for debugging.
//!
//! The entry point of the backward pass is [`Value::backward`](crate::Value::backward).

pub mod backward_op;
pub mod dot;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use graph::trace;

use crate::value::Value;

/// Runs the backward pass from `root`. Same as [`Value::backward`].
pub fn backward(root: &Value) {
    root.backward();
}
