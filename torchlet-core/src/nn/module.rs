use crate::error::TorchletError;
use crate::nn::Parameter;
use crate::value::Value;

/// Result of a forward pass.
///
/// A module with a single output unit yields one `Value`; every other module
/// yields a sequence. `Mlp` relies on this when it feeds one layer's output
/// into the next through [`Output::as_slice`].
#[derive(Debug, Clone)]
pub enum Output {
    Single(Value),
    Many(Vec<Value>),
}

impl Output {
    /// Views the output as a sequence; `Single` becomes a one-element slice.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Output::Single(value) => std::slice::from_ref(value),
            Output::Many(values) => values.as_slice(),
        }
    }

    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::Single(value) => vec![value],
            Output::Many(values) => values,
        }
    }

    /// Returns the value of a `Single` output, `None` for `Many`.
    pub fn single(&self) -> Option<&Value> {
        match self {
            Output::Single(value) => Some(value),
            Output::Many(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// The base trait for all network components (neurons, layers, networks).
///
/// A module owns its parameters and produces new graph nodes on every forward
/// pass. Parameters are shared handles: gradients written by a backward pass
/// through a forward output are visible through `parameters()`.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass over a sequence of inputs.
    ///
    /// # Errors
    /// `ShapeMismatch` when the input length does not match the module's
    /// configured width. The check happens before any node is created.
    fn forward(&self, inputs: &[Value]) -> Result<Output, TorchletError>;

    /// Returns all learnable parameters, including those of sub-modules, in
    /// construction order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. `"1.0.weight.2"`), in the same order as [`Module::parameters`].
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Sets the gradient of every parameter to zeros of its shape.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
