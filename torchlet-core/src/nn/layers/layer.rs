use crate::error::TorchletError;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::{Module, Output};
use crate::nn::parameter::Parameter;
use crate::value::Value;
use rand::Rng;
use std::fmt;

/// A collection of neurons sharing the same inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `nout` neurons with `nin` inputs each.
    pub fn new(nin: usize, nout: usize, nonlin: bool) -> Self {
        Self::with_rng(nin, nout, nonlin, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nout: usize, nonlin: bool, rng: &mut R) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::with_rng(nin, nonlin, rng))
            .collect();
        Layer { neurons }
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Layer { neurons }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Layer {
    /// Applies every neuron to the same inputs.
    ///
    /// Returns `Output::Single` when the layer has exactly one neuron and
    /// `Output::Many` otherwise.
    fn forward(&self, inputs: &[Value]) -> Result<Output, TorchletError> {
        let mut outs = self
            .neurons
            .iter()
            .map(|n| n.call(inputs))
            .collect::<Result<Vec<_>, _>>()?;
        if outs.len() == 1 {
            if let Some(single) = outs.pop() {
                return Ok(Output::Single(single));
            }
        }
        Ok(Output::Many(outs))
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (j, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("{}.{}", j, name), param));
            }
        }
        params
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neurons: Vec<String> = self.neurons.iter().map(|n| n.to_string()).collect();
        write!(f, "Layer of [{}]", neurons.join(", "))
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
