//! # torchlet
//!
//! A small reverse-mode automatic differentiation engine over scalars and
//! one-dimensional arrays, with a minimal neural-network layer on top.
//!
//! - [`Value`]: a node of the computation graph. Arithmetic on values records
//!   the operation; [`Value::backward`] fills in gradients.
//! - [`ops`]: the fallible operation builders behind the operators.
//! - [`autograd`]: the gradient rules, graph traversal, gradient checking and
//!   Graphviz rendering.
//! - [`nn`] and [`model`]: `Neuron`, `Layer` and `Mlp`, all implementing
//!   [`Module`].
//!
//! ```
//! use torchlet_core::Value;
//!
//! let a = Value::scalar(2.0);
//! let b = Value::scalar(3.0);
//! let c = &a * &b + &a;
//! c.backward();
//! assert_eq!(a.grad().and_then(|g| g.item()), Some(4.0));
//! assert_eq!(b.grad().and_then(|g| g.item()), Some(2.0));
//! ```

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;

pub use error::TorchletError;
pub use model::Mlp;
pub use nn::{Layer, Module, Neuron, Output, Parameter};
pub use value::{Operand, Payload, Value};

// Re-export traits required by public functions/structs
pub use num_traits;
