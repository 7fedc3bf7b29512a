//! # Chained matrix product
//!
//! Multiplies three 3x3 matrices in one `mul` call, times the forward and
//! backward passes, prints the graph as a text tree and writes it as SVG to
//! `graph.svg` in the current directory.
//!
//! `RUST_LOG=info cargo run --example chained_matmul`

use log::info;
use neurograph_core::render::{render_text, write_svg};
use neurograph_core::Graph;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let rows = vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ];
    let mut graph = Graph::new();
    let t1 = graph.tensor("t1", rows.clone())?;
    let t2 = graph.tensor("t2", rows.clone())?;
    let t3 = graph.tensor("t3", rows)?;

    let start = Instant::now();
    let t4 = graph.mul(&[t1, t2, t3])?;
    info!("Forward pass took {:?}", start.elapsed());
    graph.print(t4)?;

    let start = Instant::now();
    graph.initialize_root_gradient(t4)?;
    info!("Backward pass took {:?}", start.elapsed());
    for id in [t1, t2, t3] {
        graph.print(id)?;
    }

    println!("{}", render_text(&graph, t4)?);

    let mut file = BufWriter::new(File::create("graph.svg")?);
    write_svg(&graph, t4, &mut file)?;
    info!("Graph written to graph.svg");
    Ok(())
}
