//! # neurograph-nn
//!
//! Neuron, layer and multi-layer perceptron wrappers. They own no tensors:
//! parameters are leaf nodes of a caller-provided [`Graph`], and `forward`
//! records its computation in that same graph through the core dispatcher,
//! so a backward pass from any output reaches every parameter.
//!
//! [`Graph`]: neurograph_core::Graph

pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
