//! Element-wise arithmetic operations.

pub mod add;

pub use add::{add_local_derivative, add_op, validate_add};
