use thiserror::Error;

/// Custom error type for the torchlet engine.
///
/// Every variant is a contract violation detected synchronously at the call
/// site, before any new graph node is allocated. Numeric edge cases (division
/// by zero, non-finite powers) are not errors and flow through as IEEE values.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum TorchletError {
    /// An operation received an operand kind it cannot handle, e.g. a power
    /// exponent that is itself a differentiable `Value`.
    #[error("Unsupported operand kind for operation {operation}: {operand}")]
    UnsupportedOperandKind { operation: String, operand: String },

    /// Operand shapes disagree, or an input sequence length does not match a
    /// neuron's configured width.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    /// Indexed access or assignment outside the payload's valid range.
    /// Scalars have shape `[]`, so every index into them is out of range.
    #[error("Index out of range: index {index} for shape {shape:?}")]
    IndexOutOfRange { index: usize, shape: Vec<usize> },
}
