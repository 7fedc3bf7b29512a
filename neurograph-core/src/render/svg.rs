use crate::autograd::Graph;
use crate::error::NeuroGraphError;
use crate::tensor::debug::inline;
use crate::tensor::{Tensor, TensorId};
use std::collections::HashMap;
use std::io::Write;

const NODE_WIDTH: usize = 200;
const NODE_HEIGHT: usize = 64;
const H_GAP: usize = 40;
const V_GAP: usize = 56;
const MARGIN: usize = 20;
/// Data previews are skipped for blocks larger than this.
const MAX_PREVIEW_ELEMENTS: usize = 4;
const MAX_LABEL_CHARS: usize = 28;

/// Renders the DAG below `root` as a standalone SVG document.
///
/// Nodes are laid out in rows by their longest distance from the root, so
/// every edge points upward from child to parent.
pub fn render_svg(graph: &Graph, root: TensorId) -> Result<String, NeuroGraphError> {
    let order = graph.topological_order(root)?;

    let mut depth: HashMap<TensorId, usize> = HashMap::with_capacity(order.len());
    depth.insert(root, 0);
    for &id in order.iter().rev() {
        let d = depth.get(&id).copied().unwrap_or(0);
        for child in graph.children(id)? {
            let entry = depth.entry(child).or_insert(0);
            *entry = (*entry).max(d + 1);
        }
    }

    let mut levels: Vec<Vec<TensorId>> = Vec::new();
    for &id in &order {
        let d = depth[&id];
        if levels.len() <= d {
            levels.resize_with(d + 1, Vec::new);
        }
        levels[d].push(id);
    }

    let widest = levels.iter().map(Vec::len).max().unwrap_or(1);
    let width = 2 * MARGIN + widest * NODE_WIDTH + widest.saturating_sub(1) * H_GAP;
    let height = 2 * MARGIN + levels.len() * NODE_HEIGHT + levels.len().saturating_sub(1) * V_GAP;

    let mut position: HashMap<TensorId, (usize, usize)> = HashMap::with_capacity(order.len());
    for (level, ids) in levels.iter().enumerate() {
        let row_width = ids.len() * NODE_WIDTH + ids.len().saturating_sub(1) * H_GAP;
        let x0 = (width - row_width) / 2;
        for (i, &id) in ids.iter().enumerate() {
            let x = x0 + i * (NODE_WIDTH + H_GAP);
            let y = MARGIN + level * (NODE_HEIGHT + V_GAP);
            position.insert(id, (x, y));
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="monospace" font-size="11">"#,
        w = width,
        h = height
    ));
    out.push('\n');

    for &id in &order {
        let (px, py) = position[&id];
        for child in graph.children(id)? {
            let (cx, cy) = position[&child];
            out.push_str(&format!(
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#555\" stroke-width=\"1.2\"/>\n",
                cx + NODE_WIDTH / 2,
                cy,
                px + NODE_WIDTH / 2,
                py + NODE_HEIGHT
            ));
        }
    }

    for &id in &order {
        let (x, y) = position[&id];
        write_node_box(&mut out, id, graph.get(id)?, x, y);
    }

    out.push_str("</svg>\n");
    Ok(out)
}

/// Streams the SVG document produced by [`render_svg`] into `writer`.
pub fn write_svg<W: Write>(graph: &Graph, root: TensorId, writer: &mut W) -> Result<(), NeuroGraphError> {
    let svg = render_svg(graph, root)?;
    writer
        .write_all(svg.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| NeuroGraphError::RenderIo(e.to_string()))
}

fn write_node_box(out: &mut String, id: TensorId, node: &Tensor, x: usize, y: usize) {
    let fill = if node.is_leaf() { "#e8f0fe" } else { "#fef7e0" };
    let (rows, cols) = node.shape();
    out.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"6\" fill=\"{}\" stroke=\"#333\"/>\n",
        x, y, NODE_WIDTH, NODE_HEIGHT, fill
    ));

    let mut lines = vec![
        format!("{} {}", id, truncate(node.label(), MAX_LABEL_CHARS)),
        format!("op={} shape={}x{}", node.op().name(), rows, cols),
    ];
    if rows * cols <= MAX_PREVIEW_ELEMENTS {
        lines.push(format!("data={}", inline(node.data())));
        if let Some(grad) = node.gradient() {
            lines.push(format!("grad={}", inline(grad)));
        }
    } else if node.gradient().is_some() {
        lines.push("grad=yes".to_string());
    }

    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\">{}</text>\n",
            x + 8,
            y + 14 + i * 13,
            escape_xml(line)
        ));
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}

fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "svg_test.rs"]
mod tests;
