use crate::init::symmetric_uniform;
use crate::module::Module;
use log::debug;
use neurograph_core::{Graph, NeuroGraphError, Op, TensorId};
use rand::Rng;

/// A single neuron: `activation(bias + x_0 * w_0 + ... + x_n * w_n)`.
///
/// Inputs and bias are `rows x cols`; each weight is `cols x cols`, so every
/// product `x_i * w_i` keeps the `rows x cols` shape under the matrix-product
/// rule. With `rows == cols == 1` this is the classic scalar neuron.
///
/// The default element-wise `mul` gradient only lines up when `rows == cols`;
/// other shapes need a graph built with [`GraphConfig::matrix_calculus`].
///
/// [`GraphConfig::matrix_calculus`]: neurograph_core::GraphConfig::matrix_calculus
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<TensorId>,
    bias: TensorId,
    activation: Op,
}

impl Neuron {
    /// Creates `n_inputs` weight leaves labelled `w<i>` and one `bias` leaf,
    /// all initialized uniformly in `[-1, 1)`.
    ///
    /// `activation` is `Op::Tanh`, or `Op::None` for a linear neuron.
    ///
    /// # Errors
    /// - `InvalidOperation` for `n_inputs == 0` or any other activation.
    /// - `InvalidShape` for an empty `rows x cols` shape.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        rng: &mut R,
        n_inputs: usize,
        rows: usize,
        cols: usize,
        activation: Op,
    ) -> Result<Self, NeuroGraphError> {
        check_activation(activation)?;
        if n_inputs == 0 {
            return Err(NeuroGraphError::InvalidOperation(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = (0..n_inputs)
            .map(|i| {
                let data = symmetric_uniform(rng, cols, cols)?;
                Ok(graph.leaf(format!("w{}", i), data))
            })
            .collect::<Result<Vec<_>, NeuroGraphError>>()?;
        let bias = graph.leaf("bias", symmetric_uniform(rng, rows, cols)?);
        debug!(
            "Neuron created with {} input(s), bias {} and activation {}",
            n_inputs,
            bias,
            activation.name()
        );
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Builds a neuron from existing parameter nodes.
    ///
    /// # Errors
    /// - `InvalidOperation` for an unsupported activation or no weights.
    /// - `UnknownTensor` if an id does not belong to `graph`.
    /// - `ShapeMismatch` if a weight is not square with the bias' column
    ///   count.
    pub fn with_parameters(
        graph: &Graph,
        weights: Vec<TensorId>,
        bias: TensorId,
        activation: Op,
    ) -> Result<Self, NeuroGraphError> {
        check_activation(activation)?;
        if weights.is_empty() {
            return Err(NeuroGraphError::InvalidOperation(
                "a neuron needs at least one weight".to_string(),
            ));
        }
        let (_, cols) = graph.shape(bias)?;
        for &w in &weights {
            let shape = graph.shape(w)?;
            if shape != (cols, cols) {
                return Err(NeuroGraphError::ShapeMismatch {
                    expected: (cols, cols),
                    actual: shape,
                    operation: "neuron weight".to_string(),
                });
            }
        }
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Records `activation(add(bias, mul(x_0, w_0), ...))` and returns the
    /// output node.
    ///
    /// # Errors
    /// `InvalidOperation` when `inputs.len()` differs from the weight count;
    /// dispatcher errors otherwise.
    pub fn forward(&self, graph: &mut Graph, inputs: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        if inputs.len() != self.weights.len() {
            return Err(NeuroGraphError::InvalidOperation(format!(
                "neuron expects {} input(s), got {}",
                self.weights.len(),
                inputs.len()
            )));
        }
        let mut terms = Vec::with_capacity(inputs.len() + 1);
        terms.push(self.bias);
        for (&x, &w) in inputs.iter().zip(&self.weights) {
            terms.push(graph.mul(&[x, w])?);
        }
        let sum = graph.add(&terms)?;
        match self.activation {
            Op::Tanh => graph.tanh(sum),
            _ => Ok(sum),
        }
    }

    pub fn weights(&self) -> &[TensorId] {
        &self.weights
    }

    pub fn bias(&self) -> TensorId {
        self.bias
    }

    pub fn activation(&self) -> Op {
        self.activation
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, inputs: &[TensorId]) -> Result<Vec<TensorId>, NeuroGraphError> {
        Ok(vec![Neuron::forward(self, graph, inputs)?])
    }

    fn parameters(&self) -> Vec<TensorId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, TensorId)> {
        let mut named: Vec<(String, TensorId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("w{}", i), w))
            .collect();
        named.push(("bias".to_string(), self.bias));
        named
    }

    fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

fn check_activation(activation: Op) -> Result<(), NeuroGraphError> {
    match activation {
        Op::Tanh | Op::None => Ok(()),
        other => Err(NeuroGraphError::InvalidOperation(format!(
            "{} is not an activation",
            other.name()
        ))),
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
