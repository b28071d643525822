// src/model/mod.rs

pub mod mlp;

pub use mlp::Mlp;
