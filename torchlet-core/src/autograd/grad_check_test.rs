use super::*;
use crate::ops::{add_op, mul_op};

#[test]
fn test_check_grad_composite_expression() {
    let a = Value::scalar(1.5);
    let b = Value::scalar(-0.7);
    let f = |xs: &[Value]| -> Result<Value, TorchletError> {
        let (a, b) = (&xs[0], &xs[1]);
        let ab = mul_op(a, b)?;
        let sq = ab.pow(2)?;
        let r = (a + 2.0).relu();
        add_op(&(&sq / &r), b)
    };
    check_grad(f, &[a, b], 1e-6, 1e-5).unwrap();
}

#[test]
fn test_check_grad_array_input() {
    let x = Value::array(vec![0.5, -1.0, 2.0]);
    let f = |xs: &[Value]| -> Result<Value, TorchletError> {
        let x = &xs[0];
        let y = mul_op(x, x)?;
        let z = y.index(0)? + y.index(2)? * 3.0;
        Ok(z)
    };
    check_grad(f, &[x.clone()], 1e-6, 1e-5).unwrap();
    // check_grad leaves the analytical gradient on the input.
    assert_eq!(x.grad(), Some(Payload::Array(vec![1.0, 0.0, 12.0])));
}

#[test]
fn test_check_grad_rejects_non_leaf_input() {
    let a = Value::scalar(1.0);
    let b = &a + 1.0;
    let err = check_grad(|xs: &[Value]| Ok(xs[0].clone()), &[b], 1e-6, 1e-5).unwrap_err();
    assert_eq!(err, GradCheckError::InputNotLeaf { input_index: 0 });
}

#[test]
fn test_check_grad_reports_forward_errors() {
    let a = Value::array(vec![1.0, 2.0]);
    let err = check_grad(
        |xs: &[Value]| add_op(&xs[0], vec![1.0, 2.0, 3.0]),
        &[a],
        1e-6,
        1e-5,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GradCheckError::ForwardPassError(TorchletError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_check_grad_detects_wrong_gradient() {
    // Writing into the data in the forward closure breaks the graph:
    // `set` is invisible to autograd, so the analytical gradient is wrong.
    let x = Value::array(vec![2.0, 0.0]);
    let f = |xs: &[Value]| -> Result<Value, TorchletError> {
        let x = &xs[0];
        let doubled = x.index(0)? * 2.0;
        let scratch = Value::array(vec![0.0]);
        scratch.set(0, &doubled)?;
        let detached = scratch.index(0)?;
        Ok(&detached * &x.index(0)?)
    };
    let err = check_grad(f, &[x], 1e-6, 1e-5).unwrap_err();
    assert!(matches!(
        err,
        GradCheckError::GradientMismatch {
            input_index: 0,
            element_index: 0,
            ..
        }
    ));
}
