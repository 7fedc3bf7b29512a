use crate::autograd::Graph;
use crate::error::NeuroGraphError;
use crate::tensor::debug::inline;
use crate::tensor::TensorId;
use std::collections::HashSet;

/// Renders the graph below `root` as an indented tree.
///
/// Each line shows the node id, label, op and shape, plus the gradient once
/// one has been computed. A node reachable through several paths is
/// expanded the first time and referenced by id afterwards.
pub fn render_text(graph: &Graph, root: TensorId) -> Result<String, NeuroGraphError> {
    let mut out = String::new();
    let mut expanded = HashSet::new();
    write_node(graph, root, "", "", &mut expanded, &mut out)?;
    Ok(out)
}

fn write_node(
    graph: &Graph,
    id: TensorId,
    head: &str,
    tail: &str,
    expanded: &mut HashSet<TensorId>,
    out: &mut String,
) -> Result<(), NeuroGraphError> {
    let node = graph.get(id)?;
    let (rows, cols) = node.shape();
    let first_visit = expanded.insert(id);

    out.push_str(&format!(
        "{}{} {} [{}] ({}x{})",
        head,
        id,
        node.label(),
        node.op().name(),
        rows,
        cols
    ));
    if let Some(grad) = node.gradient() {
        out.push_str(&format!(" grad={}", inline(grad)));
    }
    if !first_visit && !node.is_leaf() {
        out.push_str(" (see above)\n");
        return Ok(());
    }
    out.push('\n');

    let children = node.children();
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate() {
        let (branch, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        write_node(
            graph,
            child,
            &format!("{}{}", tail, branch),
            &format!("{}{}", tail, indent),
            expanded,
            out,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
