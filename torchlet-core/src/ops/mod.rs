//! # Value Operations Module (`ops`)
//!
//! Every builder takes its operands, computes the forward payload, validates
//! shapes and operand kinds *before* allocating anything, then returns a new
//! `Value` whose `grad_fn` records the operation. No builder touches any
//! gradient; gradients are written only by the backward pass.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (`add_op`,
//!   `pow_op`, ...) returning `Result<Value, TorchletError>`. The operators
//!   on `Value` (`+ - * /`, unary `-`) and methods like [`Value::pow`](crate::Value::pow)
//!   delegate to them.
//! - **Gradient rules:** live in [`BackwardOp`](crate::autograd::BackwardOp),
//!   one match arm per primitive.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div.
//! - [`activation`]: ReLU.
//! - [`indexing`]: element selection of array values.

pub mod activation;
pub mod arithmetic;
pub mod indexing;

pub use activation::relu_op;
pub use arithmetic::{
    add_op, div_op, mul_op, neg_op, pow_op, radd_op, rdiv_op, rmul_op, rsub_op, sub_op,
};
pub use indexing::index_op;
