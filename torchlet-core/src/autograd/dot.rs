//! Graphviz rendering of a computation graph, for debugging.
//!
//! The output is plain DOT text; turning it into an image (`dot -Tsvg`) is
//! left to the caller.

use crate::autograd::graph::{trace, NodeId};
use crate::value::Payload;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt::Write;

fn format_payload(payload: Option<&Payload>) -> String {
    match payload {
        None => "None".to_string(),
        Some(Payload::Scalar(x)) => format!("{:.4}", x),
        Some(Payload::Array(xs)) => {
            let items: Vec<String> = xs.iter().map(|x| format!("{:.4}", x)).collect();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Escapes the characters that are special inside a quoted record label.
fn escape_record_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\\' | '"' | '|' | '{' | '}' | '<' | '>' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the graph reachable from `root` as a left-to-right DOT digraph.
///
/// Every value becomes a record node `{ label | data | grad }`. Values
/// produced by an operation get an extra op node (`+`, `*`, `ReLU`, ...)
/// that their producers point into.
pub fn render_dot(root: &Value) -> String {
    let (nodes, edges) = trace(root);
    let ids: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.node_id(), i))
        .collect();

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "digraph G {{");
    let _ = writeln!(out, "  rankdir=LR;");
    for (i, node) in nodes.iter().enumerate() {
        let (label, data, grad, tag) = {
            let guard = node.read_data();
            (
                escape_record_label(guard.label.as_deref().unwrap_or_default()),
                format_payload(Some(&guard.data)),
                format_payload(guard.grad.as_ref()),
                guard.grad_fn.tag(),
            )
        };
        let _ = writeln!(
            out,
            "  \"n{}\" [label=\"{{ {} | data {} | grad {} }}\", shape=record];",
            i, label, data, grad
        );
        if !tag.is_empty() {
            let _ = writeln!(out, "  \"n{}op\" [label=\"{}\"];", i, tag);
            let _ = writeln!(out, "  \"n{}op\" -> \"n{}\";", i, i);
        }
    }
    for (producer, consumer) in &edges {
        if let (Some(p), Some(c)) = (ids.get(&producer.node_id()), ids.get(&consumer.node_id())) {
            let _ = writeln!(out, "  \"n{}\" -> \"n{}op\";", p, c);
        }
    }
    let _ = writeln!(out, "}}");
    out
}
