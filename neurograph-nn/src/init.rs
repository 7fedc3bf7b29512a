use neurograph_core::{NeuroGraphError, TensorData};
use rand::Rng;

/// Builds a `rows x cols` block with values drawn uniformly from `[low, high)`.
///
/// # Errors
/// `InvalidShape` for an empty shape or when `low >= high`.
pub fn uniform<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    low: f64,
    high: f64,
) -> Result<TensorData, NeuroGraphError> {
    if !(low < high) {
        return Err(NeuroGraphError::InvalidShape {
            reason: format!("uniform range [{}, {}) is empty", low, high),
        });
    }
    let values = (0..rows * cols).map(|_| rng.gen_range(low..high)).collect();
    TensorData::new(values, rows, cols)
}

/// Uniform initialization in `[-1, 1)`, used for weights and biases.
pub fn symmetric_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
) -> Result<TensorData, NeuroGraphError> {
    uniform(rng, rows, cols, -1.0, 1.0)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
