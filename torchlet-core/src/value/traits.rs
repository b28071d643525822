// src/value/traits.rs

use crate::value::Value;
use std::fmt;
use std::sync::Arc;

impl Clone for Value {
    /// Shallow clone: the new handle refers to the same node, so gradients
    /// written through one handle are visible through the other.
    fn clone(&self) -> Self {
        Value {
            node: Arc::clone(&self.node),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Producers are not followed; a deep graph would print forever.
        match self.node.read() {
            Ok(guard) => write!(
                f,
                "Value(data={:?}, grad={:?}, op={:?}, label={:?})",
                guard.data,
                guard.grad,
                guard.grad_fn.tag(),
                guard.label
            ),
            Err(_) => write!(f, "Value(Error: RwLock poisoned)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad=", guard.data)?;
        match &guard.grad {
            Some(grad) => write!(f, "{}", grad)?,
            None => write!(f, "None")?,
        }
        write!(f, ")")
    }
}
