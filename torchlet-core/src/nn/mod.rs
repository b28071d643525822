// src/nn/mod.rs
// Network building blocks: the Module trait, parameters and layers.

pub mod layers;
pub mod module;
pub mod parameter;

pub use layers::{Layer, Neuron};
pub use module::{Module, Output};
pub use parameter::Parameter;
