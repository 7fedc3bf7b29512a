use crate::layer::Layer;
use crate::module::Module;
use log::debug;
use neurograph_core::{Graph, NeuroGraphError, TensorId};
use rand::Rng;

/// A stack of [`Layer`]s; each layer's outputs feed the next one.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds layers of sizes `layer_sizes`, the first one taking `n_inputs`
    /// inputs.
    ///
    /// # Errors
    /// `InvalidOperation` if `layer_sizes` is empty or contains a zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        n_inputs: usize,
        layer_sizes: &[usize],
        rows: usize,
        cols: usize,
    ) -> Result<Self, NeuroGraphError> {
        if layer_sizes.is_empty() {
            return Err(NeuroGraphError::InvalidOperation(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for &size in layer_sizes {
            layers.push(Layer::new(graph, rng, fan_in, size, rows, cols)?);
            fan_in = size;
        }
        debug!("MLP created: {} -> {:?}", n_inputs, layer_sizes);
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, inputs: &[TensorId]) -> Result<Vec<TensorId>, NeuroGraphError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(graph, &current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<TensorId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, TensorId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| {
                l.named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("layer{}.{}", i, name), id))
            })
            .collect()
    }

    fn n_inputs(&self) -> usize {
        self.layers.first().map(|l| l.n_inputs()).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
