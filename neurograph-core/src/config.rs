//! Configuration of the backward pass.

/// How a node reachable through several paths receives its gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientMode {
    /// Contributions from every path are summed. Nodes are processed in
    /// reverse topological order so each node propagates exactly once.
    #[default]
    Accumulate,
    /// Plain depth-first descent, left child before right child. A shared node
    /// is revisited once per incoming path and the last write wins.
    ///
    /// Shared subgraphs are walked once per path, so `n` stacked diamonds
    /// cost `2^n` visits. Not suited to real networks.
    Overwrite,
}

/// Gradient rule used for `mul` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MulGradientRule {
    /// The derivative with respect to one operand is the other operand's
    /// data, multiplied element-wise with the upstream gradient. Requires
    /// operands and output to share one shape; identical to `MatrixProduct`
    /// for 1x1 operands.
    #[default]
    Elementwise,
    /// `dA = G @ Bᵀ`, `dB = Aᵀ @ G`. Valid for every compatible shape.
    MatrixProduct,
}

/// Settings a [`Graph`](crate::Graph) applies during backward traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub gradient_mode: GradientMode,
    pub mul_rule: MulGradientRule,
}

impl GraphConfig {
    pub fn with_gradient_mode(mut self, gradient_mode: GradientMode) -> Self {
        self.gradient_mode = gradient_mode;
        self
    }

    pub fn with_mul_rule(mut self, mul_rule: MulGradientRule) -> Self {
        self.mul_rule = mul_rule;
        self
    }

    /// Accumulating backward pass with the matrix-product `mul` rule, for
    /// graphs multiplying non-square operands.
    pub fn matrix_calculus() -> Self {
        GraphConfig {
            gradient_mode: GradientMode::Accumulate,
            mul_rule: MulGradientRule::MatrixProduct,
        }
    }

    /// Depth-first overwrite with the element-wise `mul` rule.
    pub fn legacy() -> Self {
        GraphConfig {
            gradient_mode: GradientMode::Overwrite,
            mul_rule: MulGradientRule::Elementwise,
        }
    }
}
