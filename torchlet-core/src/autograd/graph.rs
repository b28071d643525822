use crate::value::{Value, ValueData};
use log::trace;
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a graph node: the address of its shared `RwLock<ValueData>`.
///
/// Stable for the lifetime of the node and shared by every clone of a `Value`
/// handle. Only valid as a key while some handle keeps the node alive.
pub type NodeId = *const RwLock<ValueData>;

/// Orders every value reachable from `root` so that each node comes after all
/// of its producers (post-order depth-first traversal).
///
/// `root` is always the last element. The traversal is iterative, so deep
/// chains do not exhaust the call stack (teardown is iterative as well, see
/// the `Drop` impl of `ValueData`).
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, producers_already_scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        trace!("[topological_sort] visiting node {:?}", node.node_id());
        let producers = node.producers();
        stack.push((node, true));
        // Reversed so producers are visited in operand order.
        for producer in producers.into_iter().rev() {
            if !visited.contains(&producer.node_id()) {
                stack.push((producer, false));
            }
        }
    }
    sorted_list
}

/// Collects all nodes reachable from `root` and the edges between them.
///
/// Nodes come in topological order (producers first, `root` last). Each edge
/// is `(producer, consumer)` and appears once even when an operation uses the
/// same operand twice.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let nodes = topological_sort(root);
    let mut seen_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut edges = Vec::new();
    for consumer in &nodes {
        for producer in consumer.producers() {
            if seen_edges.insert((producer.node_id(), consumer.node_id())) {
                edges.push((producer, consumer.clone()));
            }
        }
    }
    (nodes, edges)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
