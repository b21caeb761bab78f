//! Graph → SVG

use netfog_core::{Canvas, Graph, Layout, Position, Positions};

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::style::GraphStyle;
use crate::svg::SvgBuilder;

/// Lower bound of the weight range used for stroke scaling.
pub const MIN_WEIGHT: f64 = 1.0;

/// Draws a graph from its connections and pixel positions.
pub struct Renderer<'a> {
    style: &'a GraphStyle,
    canvas: &'a Canvas,
}

impl<'a> Renderer<'a> {
    pub fn new(style: &'a GraphStyle, canvas: &'a Canvas) -> Self {
        Self { style, canvas }
    }

    /// Lines first, then arrow overlays for arcs, then nodes with labels.
    pub fn render(&self, graph: &Graph, positions: &Positions) -> Result<String> {
        let connections = graph.get_connections();
        let max_weight = connections
            .iter()
            .map(|c| c.weight)
            .reduce(f64::max)
            .unwrap_or(MIN_WEIGHT);

        let mut svg = SvgBuilder::new(&self.canvas.view_box());
        svg.marker_defs(&self.style.marker);

        let mut overlays = Vec::new();
        for connection in &connections {
            let from = lookup(positions, &connection.from)?;
            let to = lookup(positions, &connection.to)?;
            let width = self.style.line.width(connection.weight, MIN_WEIGHT, max_weight);

            let mut attrs = vec![
                ("class", format!("{}line{}", from.index, to.index)),
                ("x1", from.x.to_string()),
                ("y1", from.y.to_string()),
                ("x2", to.x.to_string()),
                ("y2", to.y.to_string()),
                ("stroke", self.style.line.color.clone()),
                ("stroke-width", width.to_string()),
            ];
            svg.empty("line", &attrs);

            if connection.directed {
                attrs[5].1 = "none".to_string();
                attrs.push(("marker-end", "url(#marker)".to_string()));
                overlays.push(attrs);
            }
        }

        for attrs in &overlays {
            svg.empty("line", attrs);
        }

        let node_style = &self.style.node;
        for node in graph.nodes() {
            let position = lookup(positions, &node.label)?;
            svg.empty(
                "circle",
                &[
                    ("class", format!("node{}", position.index)),
                    ("cx", position.x.to_string()),
                    ("cy", position.y.to_string()),
                    ("r", node_style.radius.to_string()),
                    ("fill", node_style.fill_color.clone()),
                    ("stroke", node_style.border_color.clone()),
                ],
            );
            svg.text(
                "text",
                &[
                    ("class", format!("label{}", position.index)),
                    ("x", position.x.to_string()),
                    ("y", (position.y + node_style.label_offset).to_string()),
                    ("text-anchor", "middle".to_string()),
                ],
                &node.label,
            );
        }

        tracing::debug!(
            "Rendered {} nodes, {} connections ({} arcs)",
            graph.node_count(),
            connections.len(),
            overlays.len()
        );
        Ok(svg.finish())
    }
}

fn lookup<'p>(positions: &'p Positions, label: &str) -> Result<&'p Position> {
    positions
        .get(label)
        .ok_or_else(|| RenderError::MissingPosition(label.to_string()))
}

/// Render `graph` with explicit pixel positions.
pub fn render_svg(
    graph: &Graph,
    positions: &Positions,
    style: &GraphStyle,
    canvas: &Canvas,
) -> Result<String> {
    Renderer::new(style, canvas).render(graph, positions)
}

/// Resolve positions through `layout` (or the graph's cache) and render.
pub fn render_graph(
    graph: &mut Graph,
    layout: &dyn Layout,
    override_positions: bool,
    config: &RenderConfig,
) -> Result<String> {
    let positions = graph.resolve_positions(layout, &config.canvas, override_positions);
    render_svg(graph, &positions, &config.style, &config.canvas)
}
