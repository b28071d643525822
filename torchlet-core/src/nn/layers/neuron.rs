use crate::error::TorchletError;
use crate::nn::module::{Module, Output};
use crate::nn::parameter::Parameter;
use crate::ops::{add_op, mul_op, relu_op};
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use std::fmt;

/// A single unit: `act = bias + Σ w_i * x_i`, optionally followed by ReLU.
#[derive(Debug)]
pub struct Neuron {
    weight: Vec<Parameter>,
    bias: Parameter,
    nonlin: bool,
}

impl Neuron {
    /// Creates a neuron with `nin` weights drawn from `Uniform(-1, 1)` and a
    /// zero bias, using the thread-local RNG.
    pub fn new(nin: usize, nonlin: bool) -> Self {
        Self::with_rng(nin, nonlin, &mut rand::thread_rng())
    }

    /// Same as [`Neuron::new`] with an explicit RNG, for reproducible weights.
    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nonlin: bool, rng: &mut R) -> Self {
        let dist = Uniform::new_inclusive(-1.0, 1.0);
        let weight = (0..nin)
            .map(|_| Parameter::from(dist.sample(rng)))
            .collect();
        Neuron {
            weight,
            bias: Parameter::from(0.0),
            nonlin,
        }
    }

    /// Builds a neuron from explicit weights and bias.
    pub fn from_weights(weights: Vec<f64>, bias: f64, nonlin: bool) -> Self {
        Neuron {
            weight: weights.into_iter().map(Parameter::from).collect(),
            bias: Parameter::from(bias),
            nonlin,
        }
    }

    /// Number of inputs the neuron expects.
    pub fn nin(&self) -> usize {
        self.weight.len()
    }

    pub fn is_nonlinear(&self) -> bool {
        self.nonlin
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weight
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Computes the activation for `inputs` and returns it as one value.
    pub fn call(&self, inputs: &[Value]) -> Result<Value, TorchletError> {
        if inputs.len() != self.weight.len() {
            return Err(TorchletError::ShapeMismatch {
                expected: vec![self.weight.len()],
                actual: vec![inputs.len()],
                operation: "Neuron::forward".to_string(),
            });
        }
        let mut act = self.bias.value().clone();
        for (w, x) in self.weight.iter().zip(inputs) {
            act = add_op(&act, mul_op(w.value(), x)?)?;
        }
        Ok(if self.nonlin { relu_op(&act) } else { act })
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Output, TorchletError> {
        self.call(inputs).map(Output::Single)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weight.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params: Vec<(String, &Parameter)> = self
            .weight
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w))
            .collect();
        params.push(("bias".to_string(), &self.bias));
        params
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.nonlin { "ReLU" } else { "Linear" };
        write!(f, "{}Neuron({})", kind, self.weight.len())
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
