use crate::tensor_data::TensorData;

/// Checks if a block is approximately equal to the expected shape and data.
/// Panics if shapes differ or data differs by more than `tolerance`.
pub fn check_tensor_near(
    actual: &TensorData,
    expected_shape: (usize, usize),
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.values().len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.values().iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
