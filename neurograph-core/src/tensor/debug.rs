// src/tensor/debug.rs
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::fmt;

// Manual implementation of Debug trait
impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tensor(label={:?}, shape={:?}, op={}, children={:?}, has_grad={})",
            self.label(),
            self.shape(),
            self.op().name(),
            self.children().iter().map(|c| c.index()).collect::<Vec<_>>(),
            self.gradient().is_some()
        )
    }
}

/// One line per row: `| 1.00 | 2.00 |`.
impl fmt::Display for TensorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
            write!(f, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Compact single-line form, `[[1.00, 2.00], [3.00, 4.00]]`.
pub(crate) fn inline(data: &TensorData) -> String {
    let rows: Vec<String> = data
        .iter_rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| format!("{:.2}", v)).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();
    format!("[{}]", rows.join(", "))
}
