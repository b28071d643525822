// src/value/payload.rs

use crate::error::TorchletError;
use num_traits::{Float, One, Zero};
use std::fmt;

/// Numeric storage of a `Value` or of its gradient.
///
/// A payload is either a single `f64` (shape `[]`) or a one-dimensional array
/// of `f64` (shape `[n]`). The shape of a payload never changes after
/// construction; only element values are rewritten.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Payload {
    /// Returns the shape: `[]` for scalars, `[n]` for arrays.
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Payload::Scalar(_) => Vec::new(),
            Payload::Array(values) => vec![values.len()],
        }
    }

    /// Returns the number of elements.
    pub fn numel(&self) -> usize {
        match self {
            Payload::Scalar(_) => 1,
            Payload::Array(values) => values.len(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Payload::Scalar(_))
    }

    /// Views the elements as a flat slice (a scalar is a one-element slice).
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Payload::Scalar(value) => std::slice::from_ref(value),
            Payload::Array(values) => values.as_slice(),
        }
    }

    /// Returns the scalar value, or `None` for arrays.
    pub fn item(&self) -> Option<f64> {
        match self {
            Payload::Scalar(value) => Some(*value),
            Payload::Array(_) => None,
        }
    }

    /// Returns element `index` of an array payload.
    pub fn get(&self, index: usize) -> Result<f64, TorchletError> {
        match self {
            Payload::Array(values) if index < values.len() => Ok(values[index]),
            _ => Err(TorchletError::IndexOutOfRange {
                index,
                shape: self.shape(),
            }),
        }
    }

    /// Overwrites element `index` of an array payload.
    pub(crate) fn set(&mut self, index: usize, value: f64) -> Result<(), TorchletError> {
        let shape = self.shape();
        match self {
            Payload::Array(values) if index < values.len() => {
                values[index] = value;
                Ok(())
            }
            _ => Err(TorchletError::IndexOutOfRange { index, shape }),
        }
    }

    /// A payload of the same shape filled with zeros.
    pub fn zeros_like(&self) -> Payload {
        self.filled(f64::zero())
    }

    /// A payload of the same shape filled with ones.
    pub fn ones_like(&self) -> Payload {
        self.filled(f64::one())
    }

    fn filled(&self, value: f64) -> Payload {
        match self {
            Payload::Scalar(_) => Payload::Scalar(value),
            Payload::Array(values) => Payload::Array(vec![value; values.len()]),
        }
    }

    /// True when every element is finite.
    pub fn is_finite(&self) -> bool {
        self.as_slice().iter().all(|&x| Float::is_finite(x))
    }

    /// Applies `f` to every element.
    pub(crate) fn map<F>(&self, f: F) -> Payload
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Payload::Scalar(value) => Payload::Scalar(f(*value)),
            Payload::Array(values) => Payload::Array(values.iter().map(|&x| f(x)).collect()),
        }
    }

    /// Checks that two payloads can be combined element by element.
    ///
    /// Arrays must have equal length. A scalar pairs with anything; it is
    /// applied to every element of the array. No other broadcasting exists.
    pub(crate) fn check_elementwise(
        &self,
        other: &Payload,
        operation: &str,
    ) -> Result<(), TorchletError> {
        match (self, other) {
            (Payload::Array(a), Payload::Array(b)) if a.len() != b.len() => {
                Err(TorchletError::ShapeMismatch {
                    expected: self.shape(),
                    actual: other.shape(),
                    operation: operation.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Combines two payloads element by element after checking their shapes.
    pub(crate) fn zip_with<F>(
        &self,
        other: &Payload,
        f: F,
        operation: &str,
    ) -> Result<Payload, TorchletError>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_elementwise(other, operation)?;
        Ok(self.combine(other, f))
    }

    /// Combines two payloads whose shapes are already known to be compatible.
    pub(crate) fn combine<F>(&self, other: &Payload, f: F) -> Payload
    where
        F: Fn(f64, f64) -> f64,
    {
        match (self, other) {
            (Payload::Scalar(a), Payload::Scalar(b)) => Payload::Scalar(f(*a, *b)),
            (Payload::Scalar(a), Payload::Array(bs)) => {
                Payload::Array(bs.iter().map(|&b| f(*a, b)).collect())
            }
            (Payload::Array(as_), Payload::Scalar(b)) => {
                Payload::Array(as_.iter().map(|&a| f(a, *b)).collect())
            }
            (Payload::Array(as_), Payload::Array(bs)) => {
                Payload::Array(as_.iter().zip(bs.iter()).map(|(&a, &b)| f(a, b)).collect())
            }
        }
    }

    /// Adds `contribution` into `self`.
    ///
    /// When `self` is a scalar and the contribution an array (a scalar operand
    /// that was spread over an array), the contribution is summed first.
    pub(crate) fn accumulate(&mut self, contribution: &Payload) {
        match (self, contribution) {
            (Payload::Scalar(acc), Payload::Scalar(c)) => *acc += c,
            (Payload::Scalar(acc), Payload::Array(cs)) => *acc += cs.iter().sum::<f64>(),
            (Payload::Array(acc), Payload::Scalar(c)) => acc.iter_mut().for_each(|a| *a += c),
            (Payload::Array(acc), Payload::Array(cs)) => {
                // Shapes were validated when the node was built.
                acc.iter_mut().zip(cs.iter()).for_each(|(a, c)| *a += c);
            }
        }
    }

    /// Adds `contribution` into element `index` only.
    pub(crate) fn accumulate_at(&mut self, index: usize, contribution: f64) {
        if let Payload::Array(acc) = self {
            if let Some(slot) = acc.get_mut(index) {
                *slot += contribution;
            }
        }
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Scalar(value)
    }
}

impl From<Vec<f64>> for Payload {
    fn from(values: Vec<f64>) -> Self {
        Payload::Array(values)
    }
}

impl From<&[f64]> for Payload {
    fn from(values: &[f64]) -> Self {
        Payload::Array(values.to_vec())
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Scalar(value) => write!(f, "{}", value),
            Payload::Array(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
