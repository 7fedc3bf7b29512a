// neurograph-core/src/ops/arithmetic/add.rs

use crate::error::NeuroGraphError;
use crate::tensor_data::TensorData;

// --- Forward Operation ---

/// Element-wise sum of two equally shaped blocks.
///
/// # Errors
/// `ShapeMismatch` if the shapes differ. No broadcasting is performed.
pub fn add_op(a: &TensorData, b: &TensorData) -> Result<TensorData, NeuroGraphError> {
    a.zip_map(b, "add", |x, y| x + y)
}

/// Every operand of an `add` must share the shape of the first one.
pub fn validate_add(shapes: &[(usize, usize)]) -> Result<(), NeuroGraphError> {
    let Some((&first, rest)) = shapes.split_first() else {
        return Ok(());
    };
    for &shape in rest {
        if shape != first {
            return Err(NeuroGraphError::ShapeMismatch {
                expected: first,
                actual: shape,
                operation: "add".to_string(),
            });
        }
    }
    Ok(())
}

// --- Backward Operation ---

/// The sum is linear in each addend, so the local derivative is all ones.
pub fn add_local_derivative(child: &TensorData) -> TensorData {
    child.filled_like(1.0)
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
