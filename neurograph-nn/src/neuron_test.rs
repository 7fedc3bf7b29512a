use super::*;
use approx::assert_relative_eq;
use neurograph_core::GraphConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn grad(graph: &Graph, id: TensorId) -> f64 {
    graph.gradient(id).unwrap().unwrap().values()[0]
}

#[test]
fn test_new_creates_labelled_parameters() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let neuron = Neuron::new(&mut graph, &mut rng, 3, 2, 4, Op::Tanh).unwrap();

    assert_eq!(neuron.weights().len(), 3);
    assert_eq!(graph.len(), 4);
    for (i, &w) in neuron.weights().iter().enumerate() {
        let node = graph.get(w).unwrap();
        assert_eq!(node.label(), format!("w{}", i));
        assert_eq!(node.shape(), (4, 4));
        assert!(node.data().values().iter().all(|&v| (-1.0..1.0).contains(&v)));
    }
    assert_eq!(graph.get(neuron.bias()).unwrap().label(), "bias");
    assert_eq!(graph.shape(neuron.bias()).unwrap(), (2, 4));
    assert_eq!(neuron.parameters().len(), 4);
    assert_eq!(neuron.named_parameters()[3].0, "bias");
}

#[test]
fn test_new_rejects_bad_arguments() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    assert!(matches!(
        Neuron::new(&mut graph, &mut rng, 2, 1, 1, Op::Mul),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert!(matches!(
        Neuron::new(&mut graph, &mut rng, 0, 1, 1, Op::Tanh),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert!(graph.is_empty());
}

#[test]
fn test_forward_and_backward_of_known_neuron() {
    let mut graph = Graph::new();
    let a = graph.tensor("a", vec![vec![2.0]]).unwrap();
    let b = graph.tensor("b", vec![vec![0.0]]).unwrap();
    let w1 = graph.tensor("w1", vec![vec![-3.0]]).unwrap();
    let w2 = graph.tensor("w2", vec![vec![1.0]]).unwrap();
    let bias = graph.tensor("bias", vec![vec![6.88137]]).unwrap();

    let neuron = Neuron::with_parameters(&graph, vec![w1, w2], bias, Op::Tanh).unwrap();
    let out = neuron.forward(&mut graph, &[a, b]).unwrap();
    assert_eq!(graph.get(out).unwrap().op(), Op::Tanh);
    assert_relative_eq!(graph.data(out).unwrap().values()[0], 0.7071, epsilon = 1e-4);

    graph.initialize_root_gradient(out).unwrap();
    assert_relative_eq!(grad(&graph, w1), 1.0, epsilon = 1e-4);
    assert_relative_eq!(grad(&graph, a), -1.5, epsilon = 1e-4);
    assert_relative_eq!(grad(&graph, w2), 0.0, epsilon = 1e-12);
    assert_relative_eq!(grad(&graph, b), 0.5, epsilon = 1e-4);
    assert_relative_eq!(grad(&graph, bias), 0.5, epsilon = 1e-4);
}

#[test]
fn test_linear_neuron_skips_activation() {
    let mut graph = Graph::new();
    let x = graph.tensor("x", vec![vec![3.0]]).unwrap();
    let w = graph.tensor("w", vec![vec![2.0]]).unwrap();
    let bias = graph.tensor("bias", vec![vec![1.0]]).unwrap();
    let neuron = Neuron::with_parameters(&graph, vec![w], bias, Op::None).unwrap();
    let out = neuron.forward(&mut graph, &[x]).unwrap();
    assert_eq!(graph.get(out).unwrap().op(), Op::Add);
    assert_eq!(graph.data(out).unwrap().values(), &[7.0]);
}

#[test]
fn test_forward_rejects_wrong_input_count() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(11);
    let neuron = Neuron::new(&mut graph, &mut rng, 2, 1, 1, Op::Tanh).unwrap();
    let x = graph.tensor("x", vec![vec![1.0]]).unwrap();
    let before = graph.len();
    assert!(matches!(
        neuron.forward(&mut graph, &[x]),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert_eq!(graph.len(), before);
}

#[test]
fn test_with_parameters_checks_weight_shape() {
    let mut graph = Graph::new();
    let w = graph.tensor("w", vec![vec![1.0, 2.0]]).unwrap();
    let bias = graph.tensor("bias", vec![vec![0.0, 0.0]]).unwrap();
    assert!(matches!(
        Neuron::with_parameters(&graph, vec![w], bias, Op::Tanh),
        Err(NeuroGraphError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_matrix_neuron_output_shape() {
    let mut graph = Graph::with_config(GraphConfig::matrix_calculus());
    let mut rng = StdRng::seed_from_u64(5);
    let neuron = Neuron::new(&mut graph, &mut rng, 2, 2, 3, Op::Tanh).unwrap();
    let x0 = graph.tensor("x0", vec![vec![0.5; 3]; 2]).unwrap();
    let x1 = graph.tensor("x1", vec![vec![-0.5; 3]; 2]).unwrap();
    let out = neuron.forward(&mut graph, &[x0, x1]).unwrap();
    assert_eq!(graph.shape(out).unwrap(), (2, 3));

    graph.initialize_root_gradient(out).unwrap();
    for param in neuron.parameters() {
        let expected = graph.shape(param).unwrap();
        assert_eq!(graph.gradient(param).unwrap().unwrap().shape(), expected);
    }
}

#[test]
fn test_non_square_neuron_needs_matrix_rule_for_backward() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(5);
    let neuron = Neuron::new(&mut graph, &mut rng, 1, 2, 3, Op::Tanh).unwrap();
    let x = graph.tensor("x", vec![vec![0.5; 3]; 2]).unwrap();
    let out = neuron.forward(&mut graph, &[x]).unwrap();
    assert!(matches!(
        graph.initialize_root_gradient(out),
        Err(NeuroGraphError::ShapeMismatch { .. })
    ));
}
