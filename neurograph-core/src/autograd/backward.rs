use crate::autograd::Graph;
use crate::config::GradientMode;
use crate::error::NeuroGraphError;
use crate::tensor::TensorId;
use crate::tensor_data::TensorData;
use log::{debug, trace};
use std::collections::HashMap;

impl Graph {
    /// Seeds `root` with an all-ones gradient of its own shape and propagates
    /// it to every node reachable from `root`.
    ///
    /// This is the entry point of the backward pass. On a leaf it only sets
    /// the leaf's gradient.
    pub fn initialize_root_gradient(&mut self, root: TensorId) -> Result<(), NeuroGraphError> {
        let seed = self.data(root)?.filled_like(1.0);
        self.backward(root, seed)
    }

    /// Performs the backward pass starting from `root` with an explicit seed.
    ///
    /// Gradients of every node reachable from `root` are cleared first, then
    /// recomputed according to the graph's [`GradientMode`]. Gradients are
    /// only written back once the whole traversal succeeded.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `seed` is not shaped like `root`, or if the
    ///   element-wise `mul` rule meets operands of different shapes.
    /// - `UnknownTensor` if `root` does not belong to this graph.
    pub fn backward(&mut self, root: TensorId, seed: TensorData) -> Result<(), NeuroGraphError> {
        let root_shape = self.shape(root)?;
        if seed.shape() != root_shape {
            return Err(NeuroGraphError::ShapeMismatch {
                expected: root_shape,
                actual: seed.shape(),
                operation: "backward seed".to_string(),
            });
        }

        let order = self.topological_order(root)?;
        debug!(
            "Backward pass from {} over {} node(s), mode {:?}",
            root,
            order.len(),
            self.config().gradient_mode
        );

        let mut grad_map: HashMap<TensorId, TensorData> = HashMap::with_capacity(order.len());
        grad_map.insert(root, seed);
        match self.config().gradient_mode {
            GradientMode::Accumulate => self.propagate_accumulate(&order, &mut grad_map)?,
            GradientMode::Overwrite => self.propagate_overwrite(root, &mut grad_map)?,
        }

        for &id in &order {
            let gradient = grad_map.remove(&id);
            self.get_mut(id)?.set_gradient(gradient);
        }
        debug!("Backward pass from {} finished", root);
        Ok(())
    }

    /// Visits nodes in reverse topological order. By the time a node is
    /// reached, every parent has already contributed to its gradient, so
    /// each node propagates exactly once.
    fn propagate_accumulate(
        &self,
        order: &[TensorId],
        grad_map: &mut HashMap<TensorId, TensorData>,
    ) -> Result<(), NeuroGraphError> {
        let mut finished = Vec::with_capacity(order.len());
        for &id in order.iter().rev() {
            // Every reachable node gets at least one contribution.
            let Some(grad) = grad_map.remove(&id) else {
                continue;
            };
            let child_grads = self.child_gradients(id, &grad)?;
            for (child, child_grad) in child_grads {
                match grad_map.remove(&child) {
                    Some(existing) => {
                        let summed = existing.zip_map(&child_grad, "gradient accumulation", |a, b| a + b)?;
                        grad_map.insert(child, summed);
                    }
                    None => {
                        grad_map.insert(child, child_grad);
                    }
                }
            }
            finished.push((id, grad));
        }
        grad_map.extend(finished);
        Ok(())
    }

    /// Plain depth-first descent, left child before right child. A node
    /// reachable through several paths is overwritten on every visit, and its
    /// whole subgraph is walked again each time.
    fn propagate_overwrite(
        &self,
        id: TensorId,
        grad_map: &mut HashMap<TensorId, TensorData>,
    ) -> Result<(), NeuroGraphError> {
        let grad = grad_map.get(&id).cloned().ok_or_else(|| {
            NeuroGraphError::InvalidOperation(format!("node {} reached without a gradient", id))
        })?;
        for (child, child_grad) in self.child_gradients(id, &grad)? {
            grad_map.insert(child, child_grad);
            self.propagate_overwrite(child, grad_map)?;
        }
        Ok(())
    }

    /// Chain rule for one node: the gradient each direct child receives.
    fn child_gradients(
        &self,
        id: TensorId,
        grad: &TensorData,
    ) -> Result<Vec<(TensorId, TensorData)>, NeuroGraphError> {
        let node = self.get(id)?;
        if node.is_leaf() {
            trace!("Node {} ({}) is a leaf", id, node.label());
            return Ok(Vec::new());
        }
        let children = node.children();
        let child_data = children
            .iter()
            .map(|&c| self.data(c))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(
            "Node {} ({}): propagating through {} to {:?}",
            id,
            node.label(),
            node.op().name(),
            children
        );
        let grads = node
            .op()
            .backward(node.data(), &child_data, grad, self.config().mul_rule)?;
        Ok(children.into_iter().zip(grads).collect())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
