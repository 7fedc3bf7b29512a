//! Linear algebra operations.

pub mod matmul;

pub use matmul::{
    matmul_backward, matmul_local_derivative_elementwise, matmul_op, validate_matmul_chain,
};
