//! # Autograd
//!
//! The graph arena ([`Graph`]), the reverse-mode backward pass over it and
//! numerical gradient checking.

mod backward;
pub mod grad_check;
pub mod graph;

pub use graph::Graph;
