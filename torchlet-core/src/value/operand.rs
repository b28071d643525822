use crate::value::{Payload, Value};

/// Right-hand side of a builder operation.
///
/// Literals (`f64`, `i32`, `Vec<f64>`) are wrapped into fresh leaf values when
/// an operation needs them as graph nodes. `pow_op` only accepts `Scalar`.
#[derive(Debug, Clone)]
pub enum Operand {
    Value(Value),
    Scalar(f64),
    Array(Vec<f64>),
}

impl Operand {
    /// Short name of the operand kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Value(_) => "Value",
            Operand::Scalar(_) => "scalar",
            Operand::Array(_) => "array",
        }
    }

    /// Returns the operand as a graph node, wrapping literals into leaves.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Operand::Value(value) => value,
            Operand::Scalar(x) => Value::new(Payload::Scalar(x)),
            Operand::Array(xs) => Value::new(Payload::Array(xs)),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

impl From<&Value> for Operand {
    fn from(value: &Value) -> Self {
        Operand::Value(value.clone())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<Vec<f64>> for Operand {
    fn from(xs: Vec<f64>) -> Self {
        Operand::Array(xs)
    }
}
