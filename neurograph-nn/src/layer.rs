use crate::module::Module;
use crate::neuron::Neuron;
use log::debug;
use neurograph_core::{Graph, NeuroGraphError, Op, TensorId};
use rand::Rng;

/// A row of independent tanh neurons sharing the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// # Errors
    /// `InvalidOperation` when `n_neurons` or `n_inputs` is zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        n_inputs: usize,
        n_neurons: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self, NeuroGraphError> {
        if n_neurons == 0 {
            return Err(NeuroGraphError::InvalidOperation(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..n_neurons)
            .map(|_| Neuron::new(graph, rng, n_inputs, rows, cols, Op::Tanh))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Layer created: {} -> {}", n_inputs, n_neurons);
        Ok(Layer { neurons })
    }

    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, NeuroGraphError> {
        match neurons.first() {
            None => Err(NeuroGraphError::InvalidOperation(
                "a layer needs at least one neuron".to_string(),
            )),
            Some(first) if neurons.iter().any(|n| n.n_inputs() != first.n_inputs()) => {
                Err(NeuroGraphError::InvalidOperation(
                    "neurons of a layer must take the same number of inputs".to_string(),
                ))
            }
            Some(_) => Ok(Layer { neurons }),
        }
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }
}

impl Module for Layer {
    /// One output per neuron, in neuron order.
    fn forward(&self, graph: &mut Graph, inputs: &[TensorId]) -> Result<Vec<TensorId>, NeuroGraphError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<TensorId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, TensorId)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("neuron{}.{}", i, name), id))
            })
            .collect()
    }

    fn n_inputs(&self) -> usize {
        self.neurons.first().map(|n| n.n_inputs()).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
