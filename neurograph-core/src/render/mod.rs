//! # Rendering
//!
//! Diagnostic views of a graph. Everything here is a read-only consumer of
//! the node accessors (`shape`, `children`, `op`, `gradient`).
//!
//! - [`Graph::print`]: logs one node's shape, label, gradient and data.
//! - [`render_text`]: indented tree of the graph below a root.
//! - [`render_svg`] / [`write_svg`]: layered vector picture of the DAG.

use crate::autograd::Graph;
use crate::error::NeuroGraphError;
use crate::tensor::debug::inline;
use crate::tensor::TensorId;
use log::info;

pub mod svg;
pub mod text;

pub use svg::{render_svg, write_svg};
pub use text::render_text;

impl Graph {
    /// Logs a summary of one node at `info` level.
    pub fn print(&self, id: TensorId) -> Result<(), NeuroGraphError> {
        let node = self.get(id)?;
        let (rows, cols) = node.shape();
        let gradient = node.gradient().map(inline).unwrap_or_default();

        info!("--------------------------------");
        info!("Tensor Shape: rows={} cols={}", rows, cols);
        info!("Tensor Label: {}", node.label());
        info!("Tensor Gradient: {}", gradient);
        for line in node.data().to_string().lines() {
            info!("{}", line);
        }
        info!("--------------------------------");
        Ok(())
    }
}
