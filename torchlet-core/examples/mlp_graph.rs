// examples/mlp_graph.rs
//!
//! Builds a small MLP, runs one forward and backward pass on a squared-error
//! loss, prints the parameter gradients and the loss graph of a single neuron
//! in Graphviz DOT format (`cargo run --example mlp_graph | dot -Tsvg`).

use rand::rngs::StdRng;
use rand::SeedableRng;
use torchlet_core::autograd::dot::render_dot;
use torchlet_core::ops::{mul_op, sub_op};
use torchlet_core::{Mlp, Module, Neuron, TorchletError, Value};

fn main() -> Result<(), TorchletError> {
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::with_rng(3, &[4, 4, 1], &mut rng);
    println!("{}", mlp);

    let inputs: Vec<Value> = [2.0, 3.0, -1.0].iter().map(|&x| Value::scalar(x)).collect();
    let output = mlp.forward(&inputs)?.into_vec();
    let err = sub_op(&output[0], 1.0)?;
    let loss = mul_op(&err, &err)?.with_label("loss");
    loss.backward();
    println!("{}", loss);

    for (name, param) in mlp.named_parameters() {
        println!("{:>14}  {}", name, **param);
    }

    let neuron = Neuron::from_weights(vec![0.5, -0.5], 0.1, true);
    let x: Vec<Value> = ["x0", "x1"]
        .iter()
        .zip([2.0, 1.0])
        .map(|(label, x)| Value::scalar(x).with_label(*label))
        .collect();
    let y = neuron.call(&x)?.with_label("y");
    y.backward();
    print!("{}", render_dot(&y));
    Ok(())
}
