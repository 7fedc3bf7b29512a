use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_shapes_and_parameter_count() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let mlp = Mlp::new(&mut graph, &mut rng, 3, &[4, 4, 1], 1, 1).unwrap();
    assert_eq!(mlp.layers().len(), 3);
    assert_eq!(mlp.n_inputs(), 3);
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.parameters().len(), 41);
    assert_eq!(mlp.named_parameters()[0].0, "layer0.neuron0.w0");

    let inputs: Vec<TensorId> = [2.0, 3.0, -1.0]
        .iter()
        .map(|&v| graph.tensor("x", vec![vec![v]]).unwrap())
        .collect();
    let outputs = mlp.forward(&mut graph, &inputs).unwrap();
    assert_eq!(outputs.len(), 1);

    graph.initialize_root_gradient(outputs[0]).unwrap();
    for param in mlp.parameters() {
        assert!(graph.gradient(param).unwrap().is_some());
    }
}

#[test]
fn test_mlp_rejects_empty_layer_list() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Mlp::new(&mut graph, &mut rng, 2, &[], 1, 1),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
}

#[test]
fn test_mlp_forward_checks_input_count() {
    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let mlp = Mlp::new(&mut graph, &mut rng, 2, &[2], 1, 1).unwrap();
    let x = graph.tensor("x", vec![vec![1.0]]).unwrap();
    assert!(matches!(
        mlp.forward(&mut graph, &[x]),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
}
