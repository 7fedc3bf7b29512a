use crate::autograd::Graph;
use crate::config::GraphConfig;
use crate::error::NeuroGraphError;
use crate::tensor::TensorId;
use crate::tensor_data::TensorData;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input tensor at index {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Input tensor {input_index} has no gradient after backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNotFinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Graph error during gradient check: {0}")]
    Graph(NeuroGraphError),
}

impl From<NeuroGraphError> for GradCheckError {
    fn from(err: NeuroGraphError) -> Self {
        GradCheckError::Graph(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `build` receives a fresh graph and the ids of leaves holding `inputs`, and
/// returns the root of the computation. The implicit loss is the sum of the
/// root's elements, which matches seeding the root with ones.
pub fn check_grad<F>(
    config: GraphConfig,
    build: F,
    inputs: &[TensorData],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[TensorId]) -> Result<TensorId, NeuroGraphError>,
{
    let evaluate = |values: &[TensorData]| -> Result<(Graph, Vec<TensorId>, TensorId), NeuroGraphError> {
        let mut graph = Graph::with_config(config);
        let ids: Vec<TensorId> = values
            .iter()
            .enumerate()
            .map(|(i, data)| graph.leaf(format!("input{}", i), data.clone()))
            .collect();
        let root = build(&mut graph, &ids)?;
        Ok((graph, ids, root))
    };

    // --- Analytical gradients ---
    let (mut graph, ids, root) = evaluate(inputs)?;
    graph.initialize_root_gradient(root)?;
    let analytical: Vec<TensorData> = ids
        .iter()
        .enumerate()
        .map(|(input_index, &id)| {
            graph
                .gradient(id)?
                .cloned()
                .ok_or(GradCheckError::MissingAnalyticalGrad { input_index })
        })
        .collect::<Result<_, GradCheckError>>()?;

    // --- Numerical gradients ---
    let loss_at = |values: &[TensorData]| -> Result<f64, NeuroGraphError> {
        let (graph, _, root) = evaluate(values)?;
        Ok(graph.data(root)?.sum())
    };

    let mut perturbed = inputs.to_vec();
    for (input_index, analytical_grad) in analytical.iter().enumerate() {
        for element_index in 0..inputs[input_index].values().len() {
            let original = inputs[input_index].values()[element_index];

            perturbed[input_index].values_mut()[element_index] = original + epsilon;
            let loss_plus = loss_at(&perturbed)?;
            perturbed[input_index].values_mut()[element_index] = original - epsilon;
            let loss_minus = loss_at(&perturbed)?;
            perturbed[input_index].values_mut()[element_index] = original;

            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNotFinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }

            let analytical_value = analytical_grad.values()[element_index];
            let difference = (analytical_value - numerical_grad).abs();
            if difference > tolerance * (1.0 + numerical_grad.abs()) {
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad: analytical_value,
                    numerical_grad,
                    difference,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
