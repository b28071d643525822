use super::*;
use crate::utils::testing::{check_grad_near, scalar_grad};
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_and_tag() {
    let a = Value::scalar(3.0);
    let c = pow_op(&a, 2).unwrap();
    assert_eq!(c.item(), Some(9.0));
    assert_eq!(c.op_tag(), "**2");
    assert_eq!(pow_op(&a, 0.5).unwrap().op_tag(), "**0.5");
    assert_eq!(pow_op(&a, -1).unwrap().op_tag(), "**-1");
}

#[test]
fn test_pow_backward_matches_power_rule() {
    for &(x, p) in &[(2.0, 3.0), (1.5, -1.0), (4.0, 0.5), (-2.0, 2.0)] {
        let a = Value::scalar(x);
        let c = a.pow(p).unwrap();
        c.backward();
        let expected: f64 = p * f64::powf(x, p - 1.0);
        assert_relative_eq!(scalar_grad(&a), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_pow_array() {
    let a = Value::array(vec![2.0, 3.0]);
    let c = a.pow(3.0).unwrap();
    assert_eq!(c.data().as_slice(), &[8.0, 27.0]);
    c.backward();
    check_grad_near(&a, &[12.0, 27.0], 1e-12);
}

#[test]
fn test_pow_rejects_value_exponent() {
    let a = Value::scalar(2.0);
    let p = Value::scalar(3.0);
    let err = pow_op(&a, &p).unwrap_err();
    assert!(matches!(
        err,
        TorchletError::UnsupportedOperandKind { ref operation, .. } if operation == "pow"
    ));
    assert!(matches!(
        pow_op(&a, vec![1.0, 2.0]),
        Err(TorchletError::UnsupportedOperandKind { .. })
    ));
}

#[test]
fn test_pow_zero_base_negative_exponent_is_not_trapped() {
    let a = Value::scalar(0.0);
    let c = a.pow(-1).unwrap();
    assert!(c.item().unwrap().is_infinite());
    c.backward();
    assert!(!scalar_grad(&a).is_finite());
}
