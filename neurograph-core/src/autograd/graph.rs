use crate::config::GraphConfig;
use crate::error::NeuroGraphError;
use crate::tensor::{Tensor, TensorId};
use crate::tensor_data::TensorData;

/// Arena holding every node of a computational graph.
///
/// Nodes are appended and never removed, so a [`TensorId`] stays valid for
/// the lifetime of the graph. Operands must exist before an operation can
/// combine them, which makes insertion order a topological order: every
/// child has a smaller index than its parents.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Tensor>,
    config: GraphConfig,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a leaf tensor from nested rows.
    ///
    /// # Errors
    /// `InvalidShape` when `rows` is empty or jagged.
    pub fn tensor(
        &mut self,
        label: impl Into<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<TensorId, NeuroGraphError> {
        let data = TensorData::from_rows(rows)?;
        Ok(self.leaf(label, data))
    }

    /// Inserts a leaf tensor holding already validated data.
    pub fn leaf(&mut self, label: impl Into<String>, data: TensorData) -> TensorId {
        self.push(Tensor::leaf(label, data))
    }

    pub(crate) fn push(&mut self, node: Tensor) -> TensorId {
        let id = TensorId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: TensorId) -> Result<&Tensor, NeuroGraphError> {
        self.nodes.get(id.0).ok_or(NeuroGraphError::UnknownTensor {
            id: id.0,
            len: self.nodes.len(),
        })
    }

    pub(crate) fn get_mut(&mut self, id: TensorId) -> Result<&mut Tensor, NeuroGraphError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(NeuroGraphError::UnknownTensor { id: id.0, len })
    }

    pub fn data(&self, id: TensorId) -> Result<&TensorData, NeuroGraphError> {
        Ok(self.get(id)?.data())
    }

    pub fn shape(&self, id: TensorId) -> Result<(usize, usize), NeuroGraphError> {
        Ok(self.get(id)?.shape())
    }

    pub fn children(&self, id: TensorId) -> Result<Vec<TensorId>, NeuroGraphError> {
        Ok(self.get(id)?.children())
    }

    pub fn gradient(&self, id: TensorId) -> Result<Option<&TensorData>, NeuroGraphError> {
        Ok(self.get(id)?.gradient())
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TensorId, &Tensor)> {
        self.nodes.iter().enumerate().map(|(i, n)| (TensorId(i), n))
    }

    /// Clears every gradient in the graph.
    pub fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.set_gradient(None);
        }
    }

    /// Ids of every node reachable from `root` (root included), children
    /// before parents.
    ///
    /// Since ids grow with insertion order, sorting the reachable set
    /// ascending yields a valid topological order without a separate DFS
    /// post-order.
    pub fn topological_order(&self, root: TensorId) -> Result<Vec<TensorId>, NeuroGraphError> {
        self.get(root)?;
        let mut visited = vec![false; root.0 + 1];
        let mut stack = vec![root];
        let mut reachable = Vec::new();
        while let Some(id) = stack.pop() {
            if visited[id.0] {
                continue;
            }
            visited[id.0] = true;
            reachable.push(id);
            stack.extend(self.nodes[id.0].children());
        }
        reachable.sort_unstable();
        Ok(reachable)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
