use neurograph_core::{Graph, NeuroGraphError, TensorId};

/// Common interface of the network wrappers.
///
/// A module maps a list of input nodes to a list of output nodes, appending
/// the intermediate nodes to `graph`.
pub trait Module: std::fmt::Debug {
    /// Records the forward pass in `graph` and returns the output ids.
    fn forward(&self, graph: &mut Graph, inputs: &[TensorId]) -> Result<Vec<TensorId>, NeuroGraphError>;

    /// Ids of every learnable leaf, sub-modules included.
    fn parameters(&self) -> Vec<TensorId>;

    /// Like [`parameters`](Self::parameters), with hierarchical names such
    /// as `"layer0.neuron1.w0"`.
    fn named_parameters(&self) -> Vec<(String, TensorId)>;

    /// Number of inputs `forward` expects.
    fn n_inputs(&self) -> usize;
}
