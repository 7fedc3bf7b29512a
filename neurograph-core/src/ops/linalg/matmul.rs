// Matrix multiplication and its gradient rules.

use crate::error::NeuroGraphError;
use crate::tensor_data::TensorData;

/// Performs matrix multiplication C = A @ B.
/// A: [M, K], B: [K, N] -> C: [M, N]
pub fn matmul_op(a: &TensorData, b: &TensorData) -> Result<TensorData, NeuroGraphError> {
    let (m, k) = a.shape();
    let (k_b, n) = b.shape();
    if k != k_b {
        return Err(NeuroGraphError::ShapeMismatch {
            expected: (k, n),
            actual: b.shape(),
            operation: "mul (inner dim)".to_string(),
        });
    }

    let a_data = a.values();
    let b_data = b.values();
    let mut output_data = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0;
            for l in 0..k {
                sum += a_data[i * k + l] * b_data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }
    TensorData::new(output_data, m, n)
}

/// Chained compatibility: operand `i` columns must equal operand `i + 1` rows.
pub fn validate_matmul_chain(shapes: &[(usize, usize)]) -> Result<(), NeuroGraphError> {
    for pair in shapes.windows(2) {
        let (_, cols) = pair[0];
        let (rows, next_cols) = pair[1];
        if cols != rows {
            return Err(NeuroGraphError::ShapeMismatch {
                expected: (cols, next_cols),
                actual: pair[1],
                operation: "mul (inner dim)".to_string(),
            });
        }
    }
    Ok(())
}

/// Matrix-calculus gradients for C = A @ B: dA = G @ Bᵀ and dB = Aᵀ @ G.
pub fn matmul_backward(
    a: &TensorData,
    b: &TensorData,
    grad_output: &TensorData,
) -> Result<Vec<TensorData>, NeuroGraphError> {
    let expected = (a.rows(), b.cols());
    if grad_output.shape() != expected {
        return Err(NeuroGraphError::ShapeMismatch {
            expected,
            actual: grad_output.shape(),
            operation: "mul backward".to_string(),
        });
    }
    let grad_a = matmul_op(grad_output, &b.transpose())?;
    let grad_b = matmul_op(&a.transpose(), grad_output)?;
    Ok(vec![grad_a, grad_b])
}

/// Element-wise convention for `mul`: the derivative with respect to one
/// operand is the other operand's data.
///
/// Only defined when the sibling has the same shape as the child, which in
/// practice means square operands of equal size (or 1x1 scalars).
pub fn matmul_local_derivative_elementwise(
    children: &[&TensorData],
    child_index: usize,
) -> Result<TensorData, NeuroGraphError> {
    let (child, sibling) = match (children, child_index) {
        ([a, b], 0) => (a, b),
        ([a, b], 1) => (b, a),
        _ => {
            return Err(NeuroGraphError::InvalidOperation(format!(
                "mul node must have 2 children, found {}",
                children.len()
            )))
        }
    };
    if sibling.shape() != child.shape() {
        return Err(NeuroGraphError::ShapeMismatch {
            expected: child.shape(),
            actual: sibling.shape(),
            operation: "mul backward (elementwise)".to_string(),
        });
    }
    Ok(TensorData::clone(sibling))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
