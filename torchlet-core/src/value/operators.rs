// src/value/operators.rs
//
// std::ops implementations. Each one calls the fallible builder and panics
// with the builder's error on a contract violation (e.g. arrays of different
// lengths); use the `ops::*_op` functions directly to handle errors.

use crate::ops::arithmetic::{
    add_op, div_op, mul_op, neg_op, radd_op, rdiv_op, rmul_op, rsub_op, sub_op,
};
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:ident, $rop:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op(self, rhs).unwrap_or_else(|e| panic!("Value {} failed: {}", stringify!($method), e))
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                (&self).$method(rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                self.$method(&rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $op(self, rhs).unwrap_or_else(|e| panic!("Value {} failed: {}", stringify!($method), e))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                (&self).$method(rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $rop(self, rhs).unwrap_or_else(|e| panic!("Value {} failed: {}", stringify!($method), e))
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                self.$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op, radd_op);
impl_binary_op!(Sub, sub, sub_op, rsub_op);
impl_binary_op!(Mul, mul, mul_op, rmul_op);
impl_binary_op!(Div, div, div_op, rdiv_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self).unwrap_or_else(|e| panic!("Value neg failed: {}", e))
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        -&self
    }
}
