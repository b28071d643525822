use crate::error::TorchletError;
use crate::nn::layers::Layer;
use crate::nn::module::{Module, Output};
use crate::nn::parameter::Parameter;
use crate::value::Value;
use log::debug;
use rand::Rng;
use std::fmt;

/// A multi-layer perceptron: a stack of layers applied in sequence.
///
/// Every layer except the last applies ReLU; the last one is linear.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds layers of widths `nouts`, the first one taking `nin` inputs.
    pub fn new(nin: usize, nouts: &[usize]) -> Self {
        Self::with_rng(nin, nouts, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> Self {
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);

        let layers: Vec<Layer> = sizes
            .windows(2)
            .enumerate()
            .map(|(i, pair)| Layer::with_rng(pair[0], pair[1], i + 1 != nouts.len(), rng))
            .collect();
        debug!("Mlp created with sizes {:?}", sizes);
        Mlp { layers }
    }

    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    /// Threads `inputs` through every layer; each layer's output, viewed as
    /// a sequence, feeds the next. An empty stack returns its inputs.
    fn forward(&self, inputs: &[Value]) -> Result<Output, TorchletError> {
        let mut current = Output::Many(inputs.to_vec());
        for layer in &self.layers {
            current = layer.forward(current.as_slice())?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("{}.{}", i, name), param));
            }
        }
        params
    }
}

impl fmt::Display for Mlp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers: Vec<String> = self.layers.iter().map(|l| l.to_string()).collect();
        write!(f, "MLP of [{}]", layers.join(", "))
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
