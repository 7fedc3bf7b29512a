use neurograph_core::{Graph, TensorId};

// Used from several test crates; not every helper is used by each one.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn scalar(graph: &mut Graph, label: &str, value: f64) -> TensorId {
    graph
        .tensor(label, vec![vec![value]])
        .expect("Scalar leaf creation failed")
}

#[allow(dead_code)]
pub fn grad_of(graph: &Graph, id: TensorId) -> Vec<f64> {
    graph
        .gradient(id)
        .expect("Unknown tensor")
        .expect("Gradient missing")
        .values()
        .to_vec()
}
