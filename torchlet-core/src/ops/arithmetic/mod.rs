//! # Arithmetic operations
//!
//! `add` and `mul` are primitives with their own gradient rule. `neg`, `sub`
//! and `div` (and the reversed forms used when a plain number is on the left)
//! are compositions of `add`, `mul` and `pow`, so their gradients follow from
//! the primitives' rules. `pow` lives here as well.

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::{add_op, radd_op};
pub use div::{div_op, rdiv_op};
pub use mul::{mul_op, rmul_op};
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::{rsub_op, sub_op};
