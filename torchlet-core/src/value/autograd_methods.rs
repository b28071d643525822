use crate::autograd::graph::topological_sort;
use crate::value::{Payload, Value};
use log::{debug, trace, warn};

impl Value {
    /// Returns a copy of the accumulated gradient, or `None` if no backward
    /// pass (or `zero_grad`) has touched this value yet.
    ///
    /// Leaf gradients accumulate across `backward` calls. Intermediate
    /// (non-leaf) gradients are reset by every pass that reaches them: after
    /// `l1.backward(); l2.backward()` a node shared by both losses holds only
    /// its gradient with respect to `l2`, while the leaves below it hold the
    /// sum for both.
    pub fn grad(&self) -> Option<Payload> {
        self.read_data().grad.clone()
    }

    /// Sets the gradient to zeros of this value's shape.
    ///
    /// Always safe to call, whether or not `backward` has run.
    pub fn zero_grad(&self) {
        let mut guard = self.write_data();
        guard.grad = Some(guard.data.zeros_like());
    }

    /// Accumulates `contribution` into this value's gradient.
    pub(crate) fn acc_grad(&self, contribution: &Payload) {
        self.write_data().accumulate_grad(contribution);
    }

    /// Accumulates `contribution` into element `index` of this value's gradient.
    pub(crate) fn acc_grad_at(&self, index: usize, contribution: f64) {
        self.write_data().accumulate_grad_at(index, contribution);
    }

    /// Performs the backward pass starting from this value.
    ///
    /// Every value reachable from `self` ends up with the gradient of `self`
    /// with respect to it, summed over all paths. The seed gradient is a
    /// payload of ones shaped like `self`.
    ///
    /// Leaf gradients accumulate across calls: running `backward` twice
    /// without `zero_grad` in between doubles them. Clearing is the caller's
    /// job. Gradients of intermediate (non-leaf) nodes are recomputed from
    /// zero on every pass.
    ///
    /// Must not run concurrently with another pass over an overlapping graph.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} nodes reachable from root {:?}",
            sorted_nodes.len(),
            self.node_id()
        );

        for node in sorted_nodes.iter().filter(|node| !node.is_leaf()) {
            node.write_data().grad = None;
        }

        let seed = self.read_data().data.ones_like();
        self.write_data().grad = Some(seed);

        let mut saw_non_finite = false;
        for node in sorted_nodes.iter().rev() {
            let (data, grad, grad_fn) = {
                let mut guard = node.write_data();
                let data = guard.data.clone();
                let grad = guard.grad.get_or_insert_with(|| data.zeros_like()).clone();
                (data, grad, guard.grad_fn.clone())
            };
            trace!(
                "backward: node {:?} op '{}' grad {}",
                node.node_id(),
                grad_fn.tag(),
                grad
            );
            if !saw_non_finite && !grad.is_finite() {
                saw_non_finite = true;
                warn!(
                    "backward: non-finite gradient at node {:?} (op '{}')",
                    node.node_id(),
                    grad_fn.tag()
                );
            }
            grad_fn.propagate(&data, &grad);
        }
    }
}
