//! Constructing graphs from adjacency matrices and intermediate dictionaries

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::model::*;

impl Graph {
    /// One node per row, one connection per nonzero cell `(i, j)`.
    ///
    /// Labels default to the 0-based row index. A symmetric matrix read as
    /// undirected yields two connections per pair; no deduplication happens.
    pub fn from_adjacency_matrix(
        matrix: &[Vec<f64>],
        directed: bool,
        labels: Option<Vec<String>>,
    ) -> Result<Self> {
        let size = matrix.len();
        if let Some(row) = matrix.iter().position(|row| row.len() != size) {
            return Err(GraphError::MalformedMatrix(format!(
                "row {} has {} columns, expected {}",
                row,
                matrix[row].len(),
                size
            )));
        }

        let labels = match labels {
            Some(labels) if labels.len() != size => {
                return Err(GraphError::MalformedMatrix(format!(
                    "{} labels given for {} rows",
                    labels.len(),
                    size
                )));
            }
            Some(labels) => labels,
            None => (0..size).map(|i| i.to_string()).collect(),
        };

        let mut graph = Graph::new();
        for label in &labels {
            graph.add_node(label.clone());
        }

        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight != 0.0 {
                    graph.create_connection(&labels[i], &labels[j], weight, directed)?;
                }
            }
        }

        tracing::debug!(
            "Built graph from {}x{} matrix: {} connections",
            size,
            size,
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Nodes first (seeding positions when both coordinates are given), then edges, then arcs.
    pub fn from_intermediate(dict: &IntermediateGraph) -> Result<Self> {
        let mut graph = Graph::new();

        for (i, node) in dict.nodes.iter().enumerate() {
            graph.add_node(node.node.clone());
            if let (Some(x), Some(y)) = (node.x, node.y) {
                graph.seed_position(&node.node, x, y, i + 1);
            }
        }

        for edge in &dict.edges {
            graph.create_connection(&edge.from, &edge.to, edge.weight, false)?;
        }

        for arc in &dict.arcs {
            graph.create_connection(&arc.from, &arc.to, arc.weight, true)?;
        }

        Ok(graph)
    }

    /// The intermediate dictionary describing this graph.
    ///
    /// Coordinates are the cached normalized positions; nodes without one
    /// are emitted bare.
    pub fn to_intermediate(&self) -> IntermediateGraph {
        let nodes = self
            .nodes()
            .map(|node| match self.positions().and_then(|p| p.get(&node.label)) {
                Some(p) => IntermediateNode::with_position(node.label.clone(), p.x, p.y),
                None => IntermediateNode::new(node.label.clone()),
            })
            .collect();

        let (arcs, edges): (Vec<Connection>, Vec<Connection>) =
            self.get_connections().into_iter().partition(|c| c.directed);

        let to_link = |c: Connection| IntermediateLink::new(c.from, c.to, c.weight);

        IntermediateGraph {
            nodes,
            edges: edges.into_iter().map(to_link).collect(),
            arcs: arcs.into_iter().map(to_link).collect(),
        }
    }

    /// `node_count × node_count` weights in insertion order.
    ///
    /// An undirected connection fills both `(i, j)` and `(j, i)`; later
    /// connections overwrite earlier ones on the same cell.
    pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let size = self.node_count();
        let order: std::collections::HashMap<&str, usize> = self
            .nodes()
            .enumerate()
            .map(|(i, node)| (node.label.as_str(), i))
            .collect();

        let mut matrix = vec![vec![0.0; size]; size];
        for conn in self.get_connections() {
            let (Some(&i), Some(&j)) = (order.get(conn.from.as_str()), order.get(conn.to.as_str())) else {
                continue;
            };
            matrix[i][j] = conn.weight;
            if !conn.directed {
                matrix[j][i] = conn.weight;
            }
        }
        matrix
    }
}
