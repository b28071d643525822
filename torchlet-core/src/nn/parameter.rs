use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A wrapper around a `Value` marking it as a learnable parameter of a Module.
///
/// Parameters are always leaves. Cloning shares the underlying node.
pub struct Parameter(Value);

impl Parameter {
    pub fn new(value: Value) -> Self {
        Parameter(value)
    }

    /// Borrows the underlying `Value`, e.g. to feed it into an operation.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Consumes the Parameter and returns the underlying Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<f64> for Parameter {
    fn from(x: f64) -> Self {
        Parameter(Value::scalar(x))
    }
}

// Allow calling `Value` methods (`grad`, `item`, `zero_grad`...) directly.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.0)
    }
}

impl Clone for Parameter {
    fn clone(&self) -> Self {
        Parameter(self.0.clone())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
