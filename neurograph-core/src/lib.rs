//! # neurograph-core
//!
//! A computational-graph engine for dense 2-D tensors. Forward operations
//! (`add`, `mul`, `tanh`) are evaluated eagerly and recorded as nodes of a
//! [`Graph`]; a backward pass seeded at any node computes the gradient of
//! every node it can reach.
//!
//! ```
//! use neurograph_core::Graph;
//!
//! let mut graph = Graph::new();
//! let x = graph.tensor("x", vec![vec![0.0]]).unwrap();
//! let y = graph.tanh(x).unwrap();
//! graph.initialize_root_gradient(y).unwrap();
//! assert_eq!(graph.gradient(x).unwrap().unwrap().values(), &[1.0]);
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod ops;
pub mod render;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub use autograd::Graph;
pub use config::{GradientMode, GraphConfig, MulGradientRule};
pub use error::NeuroGraphError;
pub use ops::Op;
pub use tensor::{Tensor, TensorId};
pub use tensor_data::TensorData;
