//! # Tensor Operations Module (`ops`)
//!
//! Central hub for the operations a [`Graph`](crate::Graph)
//! can record. Operations are grouped into submodules by functionality:
//!
//! - [`arithmetic`]: element-wise addition.
//! - [`linalg`]: matrix multiplication.
//! - [`activation`]: `tanh`.
//!
//! Each submodule exposes an `xxx_op` kernel performing the forward
//! computation on [`TensorData`], a `validate_xxx` shape check over the full
//! operand list, and the local-derivative / backward rules used by the
//! backward pass. The [`Op`] enum ties them together: it is the tag stored on
//! every graph node and dispatches to the right kernel. The `dispatch`
//! submodule adds the node-building methods (`apply`, `add`, `mul`, `tanh`)
//! to [`Graph`](crate::Graph).

use crate::config::MulGradientRule;
use crate::error::NeuroGraphError;
use crate::tensor_data::TensorData;
use std::fmt;
use std::str::FromStr;

pub mod activation;
pub mod arithmetic;
mod dispatch;
pub mod linalg;

pub use activation::tanh_op;
pub use arithmetic::add_op;
pub use linalg::matmul_op;

/// Tag identifying the operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Leaf tensors carry no operation.
    None,
    Add,
    Mul,
    Tanh,
    /// Element-wise division. Recognized, but not supported.
    Div,
}

impl Op {
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::None => "none",
            Op::Add => "+",
            Op::Mul => "*",
            Op::Tanh => "tanh",
            Op::Div => "/",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::None => "none",
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Tanh => "tanh",
            Op::Div => "div",
        }
    }

    /// Checks arity and shapes of the whole operand list before any node is created.
    pub fn validate(&self, shapes: &[(usize, usize)]) -> Result<(), NeuroGraphError> {
        match self {
            Op::Add => {
                require_at_least(self, shapes, 2)?;
                arithmetic::validate_add(shapes)
            }
            Op::Mul => {
                require_at_least(self, shapes, 2)?;
                linalg::validate_matmul_chain(shapes)
            }
            Op::Tanh => {
                if shapes.len() != 1 {
                    return Err(NeuroGraphError::InvalidOperation(format!(
                        "tanh takes exactly 1 operand, got {}",
                        shapes.len()
                    )));
                }
                Ok(())
            }
            Op::Div => Err(NeuroGraphError::NotImplemented("div".to_string())),
            Op::None => Err(NeuroGraphError::InvalidOperation(
                "'none' is not an operation that can be applied".to_string(),
            )),
        }
    }

    /// Computes the value of one node from its direct operands (one or two).
    pub fn forward(&self, operands: &[&TensorData]) -> Result<TensorData, NeuroGraphError> {
        match (self, operands) {
            (Op::Add, [a, b]) => add_op(a, b),
            (Op::Mul, [a, b]) => matmul_op(a, b),
            (Op::Tanh, [a]) => Ok(tanh_op(a)),
            (Op::Div, _) => Err(NeuroGraphError::NotImplemented("div".to_string())),
            _ => Err(NeuroGraphError::InvalidOperation(format!(
                "{} cannot combine {} operand(s) in a single node",
                self.name(),
                operands.len()
            ))),
        }
    }

    /// Local derivative of a node's output with respect to child `child_index`,
    /// shaped like that child.
    ///
    /// `node` is the node's own value, `children` the values of its direct
    /// operands in left/right order. For `mul` this is the element-wise
    /// convention: the derivative with respect to one operand is the other
    /// operand's data.
    pub fn local_derivative(
        &self,
        node: &TensorData,
        children: &[&TensorData],
        child_index: usize,
    ) -> Result<TensorData, NeuroGraphError> {
        let child = children.get(child_index).ok_or_else(|| {
            NeuroGraphError::InvalidOperation(format!(
                "{} node has no child at position {}",
                self.name(),
                child_index
            ))
        })?;
        match self {
            Op::Add => Ok(arithmetic::add_local_derivative(child)),
            Op::Mul => linalg::matmul_local_derivative_elementwise(children, child_index),
            Op::Tanh => Ok(activation::tanh_local_derivative(node)),
            Op::Div => Err(NeuroGraphError::NotImplemented("div".to_string())),
            Op::None => Err(NeuroGraphError::InvalidOperation(
                "leaf tensors have no local derivative".to_string(),
            )),
        }
    }

    /// Gradients of every direct child, given the gradient flowing into the node.
    ///
    /// The returned vector matches `children` in order and each entry is
    /// shaped like the corresponding child.
    pub fn backward(
        &self,
        node: &TensorData,
        children: &[&TensorData],
        grad_output: &TensorData,
        mul_rule: MulGradientRule,
    ) -> Result<Vec<TensorData>, NeuroGraphError> {
        match (self, mul_rule) {
            (Op::Mul, MulGradientRule::MatrixProduct) => match children {
                [a, b] => linalg::matmul_backward(a, b, grad_output),
                _ => Err(NeuroGraphError::InvalidOperation(format!(
                    "mul node must have 2 children, found {}",
                    children.len()
                ))),
            },
            _ => (0..children.len())
                .map(|idx| {
                    let local = self.local_derivative(node, children, idx)?;
                    local.zip_map(grad_output, self.name(), |l, g| l * g)
                })
                .collect(),
        }
    }
}

fn require_at_least(op: &Op, shapes: &[(usize, usize)], n: usize) -> Result<(), NeuroGraphError> {
    if shapes.len() < n {
        return Err(NeuroGraphError::InvalidOperation(format!(
            "{} needs at least {} operands, got {}",
            op.name(),
            n,
            shapes.len()
        )));
    }
    Ok(())
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Op {
    type Err = NeuroGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Op::None),
            "+" | "add" => Ok(Op::Add),
            "*" | "mul" => Ok(Op::Mul),
            "tanh" => Ok(Op::Tanh),
            "/" | "div" => Ok(Op::Div),
            other => Err(NeuroGraphError::InvalidOperation(format!(
                "unrecognized operation tag '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "op_test.rs"]
mod tests;
