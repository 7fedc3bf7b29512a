//! # Single neuron backward pass
//!
//! Builds `tanh(bias + a*w1 + b*w2)` with known parameter values, runs the
//! backward pass and prints every gradient, then does the same for a small
//! randomly initialized MLP.
//!
//! `RUST_LOG=debug cargo run --example neuron_backward`

use log::info;
use neurograph_core::render::render_text;
use neurograph_core::{Graph, NeuroGraphError, Op};
use neurograph_nn::{Mlp, Module, Neuron};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NeuroGraphError> {
    env_logger::init();

    let mut graph = Graph::new();
    let a = graph.tensor("a", vec![vec![2.0]])?;
    let b = graph.tensor("b", vec![vec![0.0]])?;
    let w1 = graph.tensor("w1", vec![vec![-3.0]])?;
    let w2 = graph.tensor("w2", vec![vec![1.0]])?;
    let bias = graph.tensor("bias", vec![vec![6.881373587019543]])?;

    let neuron = Neuron::with_parameters(&graph, vec![w1, w2], bias, Op::Tanh)?;
    let out = Neuron::forward(&neuron, &mut graph, &[a, b])?;
    graph.initialize_root_gradient(out)?;

    println!("{}", render_text(&graph, out)?);
    for (name, id) in [("a", a), ("b", b), ("w1", w1), ("w2", w2), ("bias", bias)] {
        let grad = graph.gradient(id)?.map(|g| g.values()[0]).unwrap_or_default();
        println!("grad({}) = {:.4}", name, grad);
    }

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(&mut graph, &mut rng, 3, &[4, 4, 1], 1, 1)?;
    let inputs = [2.0, 3.0, -1.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| graph.tensor(format!("x{}", i), vec![vec![v]]))
        .collect::<Result<Vec<_>, _>>()?;
    let outputs = mlp.forward(&mut graph, &inputs)?;
    graph.initialize_root_gradient(outputs[0])?;
    info!(
        "MLP output {:?} with {} parameters",
        graph.data(outputs[0])?.values(),
        mlp.parameters().len()
    );
    for (name, id) in mlp.named_parameters().iter().take(4) {
        if let Some(grad) = graph.gradient(*id)? {
            println!("grad({}) = {:?}", name, grad.values());
        }
    }
    Ok(())
}
