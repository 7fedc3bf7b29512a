//! # Activation Functions
//!
//! Non-linear activation functions applied element-wise.
//!
//! ## Currently Implemented:
//! - [`tanh_op`]: hyperbolic tangent.

pub mod tanh;

pub use tanh::{tanh_local_derivative, tanh_op};
