use super::*;
use crate::utils::testing::scalar_grad;
use approx::assert_relative_eq;

#[test]
fn test_div_values() {
    let a = Value::scalar(6.0);
    let b = Value::scalar(4.0);
    let c = div_op(&a, &b).unwrap();
    assert_relative_eq!(c.item().unwrap(), 1.5);
    c.backward();
    // d(a/b)/da = 1/b, d(a/b)/db = -a/b^2
    assert_relative_eq!(scalar_grad(&a), 0.25);
    assert_relative_eq!(scalar_grad(&b), -6.0 / 16.0);
}

#[test]
fn test_div_by_literal() {
    let a = Value::scalar(3.0);
    let c = div_op(&a, 2.0).unwrap();
    assert_relative_eq!(c.item().unwrap(), 1.5);
    c.backward();
    assert_relative_eq!(scalar_grad(&a), 0.5);
}

#[test]
fn test_rdiv() {
    let a = Value::scalar(2.0);
    let c = rdiv_op(1.0, &a).unwrap();
    assert_relative_eq!(c.item().unwrap(), 0.5);
    c.backward();
    assert_relative_eq!(scalar_grad(&a), -0.25);
}

#[test]
fn test_div_by_zero_is_not_trapped() {
    let a = Value::scalar(1.0);
    let c = div_op(&a, 0.0).unwrap();
    assert!(c.item().unwrap().is_infinite());
    let z = Value::scalar(0.0);
    let d = div_op(&a, &z).unwrap();
    assert!(d.item().unwrap().is_infinite());
    d.backward();
    assert!(!scalar_grad(&z).is_finite());
}
