use super::*;

fn data(rows: Vec<Vec<f64>>) -> TensorData {
    TensorData::from_rows(rows).expect("Failed to create test data")
}

#[test]
fn test_check_grad_matmul_chain_non_square() {
    let inputs = vec![
        data(vec![vec![0.5, -1.0, 2.0], vec![1.5, 0.25, -0.75]]),
        data(vec![vec![1.0, 0.5], vec![-2.0, 0.1], vec![0.3, 0.7]]),
        data(vec![vec![0.2, -0.4, 1.1], vec![0.9, 0.6, -1.3]]),
    ];
    check_grad(
        GraphConfig::matrix_calculus(),
        |graph, ids| graph.mul(ids),
        &inputs,
        1e-6,
        1e-5,
    )
    .unwrap_or_else(|e| panic!("Matmul chain grad check failed: {}", e));
}

#[test]
fn test_check_grad_tanh_of_sum() {
    let inputs = vec![
        data(vec![vec![0.1, -0.2], vec![0.3, 0.8]]),
        data(vec![vec![-0.5, 0.4], vec![0.05, -1.2]]),
        data(vec![vec![0.7, 0.0], vec![-0.3, 0.6]]),
    ];
    check_grad(
        GraphConfig::default(),
        |graph, ids| {
            let s = graph.add(ids)?;
            graph.tanh(s)
        },
        &inputs,
        1e-6,
        1e-5,
    )
    .unwrap_or_else(|e| panic!("tanh(sum) grad check failed: {}", e));
}

#[test]
fn test_check_grad_neuron_with_shared_input() {
    // tanh(x @ w + x): x feeds two branches.
    let inputs = vec![
        data(vec![vec![0.3, -0.6], vec![0.9, 0.1]]),
        data(vec![vec![0.4, 0.2], vec![-0.7, 0.5]]),
    ];
    check_grad(
        GraphConfig::matrix_calculus(),
        |graph, ids| {
            let xw = graph.mul(&[ids[0], ids[1]])?;
            let s = graph.add(&[xw, ids[0]])?;
            graph.tanh(s)
        },
        &inputs,
        1e-6,
        1e-5,
    )
    .unwrap_or_else(|e| panic!("shared input grad check failed: {}", e));
}

#[test]
fn test_check_grad_flags_default_mul_rule_on_matrices() {
    let inputs = vec![
        data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
        data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]),
    ];
    let result = check_grad(GraphConfig::default(), |graph, ids| graph.mul(ids), &inputs, 1e-6, 1e-5);
    match result {
        Err(GradCheckError::GradientMismatch {
            input_index,
            element_index,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(element_index, 0);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_propagates_graph_errors() {
    let inputs = vec![TensorData::ones(2, 3).unwrap(), TensorData::ones(2, 3).unwrap()];
    let result = check_grad(GraphConfig::default(), |graph, ids| graph.mul(ids), &inputs, 1e-6, 1e-5);
    assert!(matches!(
        result,
        Err(GradCheckError::Graph(NeuroGraphError::ShapeMismatch { .. }))
    ));
}
