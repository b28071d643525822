use super::*;
use crate::value::Value;

#[test]
fn test_inputs_and_tags() {
    let a = Value::scalar(1.0);
    let b = Value::scalar(2.0);

    assert!(BackwardOp::Leaf.inputs().is_empty());
    assert_eq!(BackwardOp::Leaf.tag(), "");

    let add = BackwardOp::Add {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    let inputs = add.inputs();
    assert_eq!(inputs.len(), 2);
    assert!(inputs[0].ptr_eq(&a));
    assert!(inputs[1].ptr_eq(&b));
    assert_eq!(add.tag(), "+");

    let pow = BackwardOp::Pow {
        base: a.clone(),
        exponent: 3.0,
    };
    assert_eq!(pow.inputs().len(), 1);
    assert_eq!(pow.tag(), "**3");

    let index = BackwardOp::Index {
        input: b.clone(),
        index: 0,
    };
    assert_eq!(index.tag(), "getitem");
    assert_eq!(BackwardOp::Relu { input: a }.tag(), "ReLU");
}

#[test]
fn test_propagate_accumulates_instead_of_assigning() {
    let a = Value::scalar(2.0);
    let b = Value::scalar(5.0);
    let op = BackwardOp::Mul {
        lhs: a.clone(),
        rhs: b.clone(),
    };
    let out = Payload::Scalar(10.0);
    op.propagate(&out, &Payload::Scalar(1.0));
    op.propagate(&out, &Payload::Scalar(1.0));
    assert_eq!(a.grad(), Some(Payload::Scalar(10.0)));
    assert_eq!(b.grad(), Some(Payload::Scalar(4.0)));
}

#[test]
fn test_propagate_relu_uses_output_mask() {
    let x = Value::array(vec![-1.0, 0.0, 2.0]);
    let op = BackwardOp::Relu { input: x.clone() };
    op.propagate(
        &Payload::Array(vec![0.0, 0.0, 2.0]),
        &Payload::Array(vec![5.0, 5.0, 5.0]),
    );
    assert_eq!(x.grad(), Some(Payload::Array(vec![0.0, 0.0, 5.0])));
}

#[test]
fn test_propagate_leaf_is_noop() {
    BackwardOp::Leaf.propagate(&Payload::Scalar(1.0), &Payload::Scalar(1.0));
}
