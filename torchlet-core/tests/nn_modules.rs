use approx::assert_relative_eq;
use torchlet_core::ops::{add_op, mul_op, sub_op};
use torchlet_core::{Layer, Mlp, Module, Neuron, Output, TorchletError, Value};

mod common;
use common::{scalars, seeded_rng};

#[test]
fn test_scenario_single_neuron() -> Result<(), TorchletError> {
    let n = Neuron::from_weights(vec![0.5, -0.5, 1.0], 0.0, true);
    let out = n.forward(&scalars(&[1.0, 2.0, 3.0]))?;
    let y = out.single().expect("a neuron has one output");
    assert_relative_eq!(y.item().unwrap(), 2.5);
    Ok(())
}

#[test]
fn test_mlp_has_41_parameters_in_construction_order() {
    let mut rng = seeded_rng(5);
    let mlp = Mlp::with_rng(3, &[4, 4, 1], &mut rng);
    let params = mlp.parameters();
    assert_eq!(params.len(), 41);

    let mut expected = Vec::new();
    for layer in mlp.layers() {
        for neuron in layer.neurons() {
            expected.extend(neuron.weights().iter());
            expected.push(neuron.bias());
        }
    }
    assert_eq!(expected.len(), params.len());
    for (a, b) in params.iter().zip(expected) {
        assert!(a.value().ptr_eq(b.value()));
    }
}

#[test]
fn test_layer_output_shape_depends_on_width() -> Result<(), TorchletError> {
    let mut rng = seeded_rng(11);
    let xs = scalars(&[0.2, -0.4]);
    let one = Layer::with_rng(2, 1, false, &mut rng);
    assert!(matches!(one.forward(&xs)?, Output::Single(_)));
    let two = Layer::with_rng(2, 2, false, &mut rng);
    assert!(matches!(two.forward(&xs)?, Output::Many(ref v) if v.len() == 2));
    Ok(())
}

#[test]
fn test_seeded_networks_are_reproducible() -> Result<(), TorchletError> {
    let a = Mlp::with_rng(2, &[3, 1], &mut seeded_rng(99));
    let b = Mlp::with_rng(2, &[3, 1], &mut seeded_rng(99));
    let xs = scalars(&[0.5, -1.5]);
    let ya = a.forward(&xs)?.into_vec()[0].item();
    let yb = b.forward(&xs)?.into_vec()[0].item();
    assert_eq!(ya, yb);
    Ok(())
}

#[test]
fn test_gradient_descent_reduces_loss() -> Result<(), TorchletError> {
    // Fit y = 2*x0 - x1 + 0.5 with one linear neuron, rebuilding it from the
    // updated weights after every step.
    let data = [
        ([1.0, 0.0], 2.5),
        ([0.0, 1.0], -0.5),
        ([1.0, 1.0], 1.5),
        ([2.0, -1.0], 5.5),
    ];
    let loss_of = |n: &Neuron| -> Result<Value, TorchletError> {
        let mut loss = Value::scalar(0.0);
        for (x, target) in &data {
            let err = sub_op(&n.call(&scalars(x))?, *target)?;
            loss = add_op(&loss, mul_op(&err, &err)?)?;
        }
        Ok(loss)
    };

    let mut neuron = Neuron::from_weights(vec![0.0, 0.0], 0.0, false);
    let initial = loss_of(&neuron)?.item().unwrap();
    let mut previous = initial;
    for _ in 0..300 {
        let loss = loss_of(&neuron)?;
        neuron.zero_grad();
        loss.backward();
        let step = |p: &torchlet_core::Parameter| {
            p.item().unwrap() - 0.05 * p.grad().and_then(|g| g.item()).unwrap()
        };
        let weights = neuron.weights().iter().map(&step).collect();
        let bias = step(neuron.bias());
        neuron = Neuron::from_weights(weights, bias, false);

        let current = loss_of(&neuron)?.item().unwrap();
        assert!(current <= previous + 1e-12);
        previous = current;
    }
    assert!(previous < 0.01 * initial);
    Ok(())
}
