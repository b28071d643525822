use crate::value::{Payload, Value};

/// The operation that produced a node, with everything its gradient rule needs.
///
/// Every non-leaf `Value` stores one of these in its `grad_fn` field. The
/// backward pass calls [`BackwardOp::propagate`], the single place where the
/// calculus rule of every operation lives. Derived operations (negation,
/// subtraction, division) have no variant of their own: they are built out of
/// `Add`, `Mul` and `Pow` nodes and inherit those rules.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    /// An input value with no producers.
    Leaf,
    /// `lhs + rhs`, elementwise.
    Add { lhs: Value, rhs: Value },
    /// `lhs * rhs`, elementwise.
    Mul { lhs: Value, rhs: Value },
    /// `base ^ exponent` for a plain numeric exponent.
    Pow { base: Value, exponent: f64 },
    /// `max(0, input)`, elementwise.
    Relu { input: Value },
    /// Element `index` of an array value.
    Index { input: Value, index: usize },
}

impl BackwardOp {
    /// Returns the operands of the operation, in operand order.
    ///
    /// These are the graph edges used to traverse backward. The same value may
    /// appear twice (e.g. `a * a`).
    pub fn inputs(&self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => {
                vec![lhs.clone(), rhs.clone()]
            }
            BackwardOp::Pow { base, .. } => vec![base.clone()],
            BackwardOp::Relu { input } | BackwardOp::Index { input, .. } => vec![input.clone()],
        }
    }

    /// Consumes the operation and returns its operands without cloning them.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Relu { input } | BackwardOp::Index { input, .. } => vec![input],
        }
    }

    /// Short label of the operation, for diagnostics and visualization.
    pub fn tag(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Relu { .. } => "ReLU".to_string(),
            BackwardOp::Index { .. } => "getitem".to_string(),
        }
    }

    /// Pushes the output gradient `grad_output` back into the operands' grads.
    ///
    /// `output` is the forward payload of the node owning this op. Operand
    /// shapes were validated when the node was built, so every combination
    /// here is shape-compatible. Contributions are added, never assigned.
    pub(crate) fn propagate(&self, output: &Payload, grad_output: &Payload) {
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => {
                lhs.acc_grad(grad_output);
                rhs.acc_grad(grad_output);
            }
            BackwardOp::Mul { lhs, rhs } => {
                // Read both operands before writing either: `lhs` and `rhs`
                // may be the same node.
                let lhs_data = lhs.data();
                let rhs_data = rhs.data();
                lhs.acc_grad(&rhs_data.combine(grad_output, |b, g| b * g));
                rhs.acc_grad(&lhs_data.combine(grad_output, |a, g| a * g));
            }
            BackwardOp::Pow { base, exponent } => {
                let p = *exponent;
                let local = base
                    .data()
                    .combine(grad_output, |x, g| p * x.powf(p - 1.0) * g);
                base.acc_grad(&local);
            }
            BackwardOp::Relu { input } => {
                let local = output.combine(grad_output, |y, g| if y > 0.0 { g } else { 0.0 });
                input.acc_grad(&local);
            }
            BackwardOp::Index { input, index } => {
                let g: f64 = grad_output.as_slice().iter().sum();
                input.acc_grad_at(*index, g);
            }
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
