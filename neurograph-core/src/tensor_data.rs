use crate::error::NeuroGraphError;

/// Dense, row-major storage for a 2-D block of `f64` values.
///
/// A `TensorData` is always rectangular and never empty: both `rows` and
/// `cols` are at least 1, and `values.len() == rows * cols`. Every
/// constructor enforces this, so code holding a `TensorData` can index it
/// without re-checking.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorData {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl TensorData {
    /// Creates storage from a flat row-major buffer.
    ///
    /// # Errors
    /// `InvalidShape` if a dimension is zero or the buffer length does not
    /// equal `rows * cols`.
    pub fn new(values: Vec<f64>, rows: usize, cols: usize) -> Result<Self, NeuroGraphError> {
        if rows == 0 || cols == 0 {
            return Err(NeuroGraphError::InvalidShape {
                reason: format!("dimensions must be non-zero, got ({}, {})", rows, cols),
            });
        }
        if values.len() != rows * cols {
            return Err(NeuroGraphError::InvalidShape {
                reason: format!(
                    "data length {} does not match shape ({}, {})",
                    values.len(),
                    rows,
                    cols
                ),
            });
        }
        Ok(TensorData { values, rows, cols })
    }

    /// Creates storage from nested rows, rejecting empty or jagged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, NeuroGraphError> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(NeuroGraphError::InvalidShape {
                reason: "tensor must have at least one row".to_string(),
            });
        }
        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(NeuroGraphError::InvalidShape {
                reason: "tensor must have at least one column".to_string(),
            });
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(NeuroGraphError::InvalidShape {
                reason: format!(
                    "row {} has {} columns, expected {}",
                    idx,
                    row.len(),
                    n_cols
                ),
            });
        }
        let values = rows.into_iter().flatten().collect();
        Ok(TensorData {
            values,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Creates a `rows x cols` block where every element is `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, NeuroGraphError> {
        Self::new(vec![value; rows * cols], rows, cols)
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self, NeuroGraphError> {
        Self::filled(rows, cols, 1.0)
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, NeuroGraphError> {
        Self::filled(rows, cols, 0.0)
    }

    /// Same shape as `self`, every element `value`. Cannot fail.
    pub fn filled_like(&self, value: f64) -> Self {
        TensorData {
            values: vec![value; self.values.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of the elements.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterates over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Applies `f` to every element.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        TensorData {
            values: self.values.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combines two equally shaped blocks element by element.
    ///
    /// `operation` is only used to describe a `ShapeMismatch`.
    pub fn zip_map<F>(&self, other: &TensorData, operation: &str, f: F) -> Result<Self, NeuroGraphError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(NeuroGraphError::ShapeMismatch {
                expected: self.shape(),
                actual: other.shape(),
                operation: operation.to_string(),
            });
        }
        Ok(TensorData {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn transpose(&self) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                values.push(self.values[r * self.cols + c]);
            }
        }
        TensorData {
            values,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

#[cfg(test)]
#[path = "tensor_data_test.rs"]
mod tests;
