//! # Tensor Node Module
//!
//! A [`Tensor`] is one node of the computational graph: its forward value,
//! the [`Op`] that produced it, references to the operands it was computed
//! from and, once a backward pass has reached it, its gradient.
//!
//! Nodes are owned by a [`Graph`](crate::Graph) arena and referenced through
//! [`TensorId`] handles. Children are stored as ids, never as owned values, so
//! a leaf can feed any number of parents.

use crate::ops::Op;
use crate::tensor_data::TensorData;
use std::fmt;

pub(crate) mod debug;

/// Handle to a node stored in a [`Graph`](crate::Graph).
///
/// Ids are arena indices. A child is always inserted before its parents, so
/// a parent's id is strictly greater than its children's ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(pub(crate) usize);

impl TensorId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for TensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the computational graph.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    label: String,
    data: TensorData,
    op: Op,
    left: Option<TensorId>,
    right: Option<TensorId>,
    gradient: Option<TensorData>,
}

impl Tensor {
    /// A user-constructed node: no children, no op.
    pub(crate) fn leaf(label: impl Into<String>, data: TensorData) -> Self {
        Tensor {
            label: label.into(),
            data,
            op: Op::None,
            left: None,
            right: None,
            gradient: None,
        }
    }

    /// The output of an operation, with its forward value already computed.
    pub(crate) fn from_op(
        label: String,
        data: TensorData,
        op: Op,
        left: TensorId,
        right: Option<TensorId>,
    ) -> Self {
        Tensor {
            label,
            data,
            op,
            left: Some(left),
            right,
            gradient: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// `(rows, cols)` of the node's data.
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    pub fn left_child(&self) -> Option<TensorId> {
        self.left
    }

    pub fn right_child(&self) -> Option<TensorId> {
        self.right
    }

    /// Left child then right child, omitting absent ones.
    pub fn children(&self) -> Vec<TensorId> {
        self.left.into_iter().chain(self.right).collect()
    }

    pub fn children_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The gradient computed by the last backward pass, if it reached this node.
    pub fn gradient(&self) -> Option<&TensorData> {
        self.gradient.as_ref()
    }

    pub(crate) fn set_gradient(&mut self, gradient: Option<TensorData>) {
        debug_assert!(gradient
            .as_ref()
            .map_or(true, |g| g.shape() == self.data.shape()));
        self.gradient = gradient;
    }
}

#[cfg(test)]
#[path = "tensor_test.rs"]
mod tests;
