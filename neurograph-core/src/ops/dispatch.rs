//! Op dispatcher: validates operands, computes forward values eagerly and
//! records the produced nodes in the graph.

use crate::autograd::Graph;
use crate::error::NeuroGraphError;
use crate::ops::Op;
use crate::tensor::{Tensor, TensorId};
use log::debug;

impl Graph {
    /// Applies `op` to `operands` and returns the id of the resulting node.
    ///
    /// Shapes of the whole operand list are validated before any node is
    /// created, so a failed call leaves the graph unchanged.
    ///
    /// - `add` with more than two operands is reduced as a pairwise binary
    ///   tree; an odd trailing operand is carried to the next round.
    /// - `mul` with more than two operands is folded left to right.
    ///
    /// Every binary step becomes its own node, with the two combined operands
    /// as left and right children.
    ///
    /// # Errors
    /// - `ShapeMismatch` for incompatible operand shapes.
    /// - `InvalidOperation` for `Op::None` or a wrong operand count.
    /// - `NotImplemented` for `Op::Div`.
    /// - `UnknownTensor` if an operand id does not belong to this graph.
    pub fn apply(&mut self, op: Op, operands: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        let shapes = operands
            .iter()
            .map(|&id| self.shape(id))
            .collect::<Result<Vec<_>, _>>()?;
        op.validate(&shapes)?;

        match op {
            Op::Add => self.reduce_pairwise(op, operands),
            Op::Mul => self.fold_left(op, operands),
            Op::Tanh => self.combine(op, operands[0], None),
            other => Err(NeuroGraphError::InvalidOperation(format!(
                "{} cannot be applied",
                other.name()
            ))),
        }
    }

    /// Same as [`apply`](Self::apply) with the operation given as a textual
    /// tag (`"+"`, `"mul"`, `"tanh"`, ...).
    pub fn apply_tag(&mut self, tag: &str, operands: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        let op: Op = tag.parse()?;
        self.apply(op, operands)
    }

    pub fn add(&mut self, operands: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        self.apply(Op::Add, operands)
    }

    pub fn mul(&mut self, operands: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        self.apply(Op::Mul, operands)
    }

    pub fn tanh(&mut self, input: TensorId) -> Result<TensorId, NeuroGraphError> {
        self.apply(Op::Tanh, &[input])
    }

    /// Always fails with `NotImplemented`.
    pub fn div(&mut self, operands: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        self.apply(Op::Div, operands)
    }

    fn reduce_pairwise(&mut self, op: Op, operands: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        let mut level = operands.to_vec();
        while level.len() > 1 {
            let mut next = Vec::with_capacity((level.len() + 1) / 2);
            for pair in level.chunks(2) {
                match *pair {
                    [left, right] => next.push(self.combine(op, left, Some(right))?),
                    [carried] => next.push(carried),
                    _ => {}
                }
            }
            level = next;
        }
        Ok(level[0])
    }

    fn fold_left(&mut self, op: Op, operands: &[TensorId]) -> Result<TensorId, NeuroGraphError> {
        let mut result = operands[0];
        for &next in &operands[1..] {
            result = self.combine(op, result, Some(next))?;
        }
        Ok(result)
    }

    /// Computes one node from its direct operands and appends it.
    fn combine(
        &mut self,
        op: Op,
        left: TensorId,
        right: Option<TensorId>,
    ) -> Result<TensorId, NeuroGraphError> {
        let left_node = self.get(left)?;
        let (data, label) = match right {
            Some(right) => {
                let right_node = self.get(right)?;
                let data = op.forward(&[left_node.data(), right_node.data()])?;
                let label = format!("{} {} {}", left_node.label(), op.symbol(), right_node.label());
                (data, label)
            }
            None => {
                let data = op.forward(&[left_node.data()])?;
                (data, format!("{}({})", op.symbol(), left_node.label()))
            }
        };
        let shape = data.shape();
        let id = self.push(Tensor::from_op(label, data, op, left, right));
        debug!(
            "Created node {} ({}) with shape {:?} from {} and {:?}",
            id,
            op.name(),
            shape,
            left,
            right
        );
        Ok(id)
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
