use super::*;
use crate::utils::testing::{check_grad_near, check_payload_near, scalar_grad};
use crate::value::Payload;
use approx::assert_relative_eq;

#[test]
fn test_add_forward_scalars() {
    let a = Value::scalar(2.0);
    let b = Value::scalar(3.0);
    let c = add_op(&a, &b).unwrap();
    assert_eq!(c.item(), Some(5.0));
    assert_eq!(c.op_tag(), "+");
    assert_eq!(c.producers().len(), 2);
    assert!(c.producers()[0].ptr_eq(&a));
    assert!(c.producers()[1].ptr_eq(&b));
}

#[test]
fn test_add_backward_gives_ones() {
    let a = Value::scalar(2.0);
    let b = Value::scalar(3.0);
    let c = add_op(&a, &b).unwrap();
    c.backward();
    assert_relative_eq!(scalar_grad(&a), 1.0);
    assert_relative_eq!(scalar_grad(&b), 1.0);
    assert_relative_eq!(scalar_grad(&c), 1.0);
}

#[test]
fn test_add_literal_is_wrapped_into_leaf() {
    let a = Value::scalar(1.5);
    let c = add_op(&a, 2.0).unwrap();
    assert_eq!(c.item(), Some(3.5));
    let producers = c.producers();
    assert!(producers[1].is_leaf());
    assert_eq!(producers[1].item(), Some(2.0));

    let r = radd_op(4, &a).unwrap();
    assert_eq!(r.item(), Some(5.5));
    assert!(r.producers()[0].ptr_eq(&a));
}

#[test]
fn test_add_arrays_elementwise() {
    let a = Value::array(vec![1.0, 2.0, 3.0]);
    let b = Value::array(vec![10.0, 20.0, 30.0]);
    let c = add_op(&a, &b).unwrap();
    check_payload_near(&c.data(), &[11.0, 22.0, 33.0], 1e-12);
    c.backward();
    check_grad_near(&a, &[1.0, 1.0, 1.0], 1e-12);
    check_grad_near(&b, &[1.0, 1.0, 1.0], 1e-12);
}

#[test]
fn test_add_scalar_to_array_reduces_scalar_grad() {
    let a = Value::array(vec![1.0, 2.0, 3.0]);
    let s = Value::scalar(0.5);
    let c = add_op(&a, &s).unwrap();
    check_payload_near(&c.data(), &[1.5, 2.5, 3.5], 1e-12);
    c.backward();
    assert_relative_eq!(scalar_grad(&s), 3.0);
    check_grad_near(&a, &[1.0, 1.0, 1.0], 1e-12);
}

#[test]
fn test_add_shape_mismatch_allocates_nothing() {
    let a = Value::array(vec![1.0, 2.0]);
    let b = Value::array(vec![1.0, 2.0, 3.0]);
    let err = add_op(&a, &b).unwrap_err();
    assert_eq!(
        err,
        TorchletError::ShapeMismatch {
            expected: vec![2],
            actual: vec![3],
            operation: "add".to_string(),
        }
    );
    assert!(a.grad().is_none());
    assert_eq!(a.data(), Payload::Array(vec![1.0, 2.0]));
}

#[test]
fn test_add_same_operand_twice() {
    let a = Value::scalar(3.0);
    let c = add_op(&a, &a).unwrap();
    c.backward();
    assert_relative_eq!(scalar_grad(&a), 2.0);
}
