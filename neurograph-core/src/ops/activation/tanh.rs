use crate::tensor_data::TensorData;

// --- Forward Operation ---

/// Applies the hyperbolic tangent element-wise.
pub fn tanh_op(input: &TensorData) -> TensorData {
    input.map(f64::tanh)
}

// --- Backward Operation ---

/// Local derivative of `y = tanh(x)`, computed from the forward output:
/// `1 - y^2`.
pub fn tanh_local_derivative(output: &TensorData) -> TensorData {
    output.map(|y| 1.0 - y * y)
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
