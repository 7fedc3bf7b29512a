use neurograph_core::{Graph, TensorId};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic generator so parameter values are stable across runs.
#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[allow(dead_code)]
pub fn scalar_inputs(graph: &mut Graph, values: &[f64]) -> Vec<TensorId> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            graph
                .tensor(format!("x{}", i), vec![vec![v]])
                .expect("Scalar input creation failed")
        })
        .collect()
}
