//! Graph wrapper using petgraph::StableDiGraph with a label index

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::error::{GraphError, Result};
use crate::layout::{denormalize_positions, normalize_positions, Canvas, Layout};
use crate::model::*;

/// A weighted graph mixing arcs and undirected edges.
///
/// Every connection is stored once, as an outgoing adjacency entry of its
/// `from` node. Iteration order is node insertion order, then per-node
/// connection insertion order.
pub struct Graph {
    inner: StableDiGraph<Node, Link>,
    index: HashMap<String, NodeIndex>,
    /// Normalized coordinates, when known.
    positions: Option<Positions>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("positioned", &self.positions.is_some())
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
            positions: None,
        }
    }

    /// Add a node unless one with the same label exists. Returns whether it was inserted.
    pub fn add_node(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.index.contains_key(&label) {
            tracing::debug!("Node '{}' already exists, skipping", label);
            return false;
        }

        let idx = self.inner.add_node(Node::new(label.clone()));
        self.index.insert(label, idx);
        true
    }

    /// Append a connection to the outgoing list of `from`.
    ///
    /// Both endpoints must already exist; otherwise nothing is created.
    pub fn create_connection(&mut self, from: &str, to: &str, weight: f64, directed: bool) -> Result<()> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        self.inner.add_edge(source, target, Link { weight, directed });
        Ok(())
    }

    /// Undirected connection with the default weight.
    pub fn connect(&mut self, from: &str, to: &str) -> Result<()> {
        self.create_connection(from, to, DEFAULT_WEIGHT, false)
    }

    /// All connections, flattened in canonical order.
    pub fn get_connections(&self) -> Vec<Connection> {
        self.inner
            .node_indices()
            .flat_map(|idx| self.resolved_outgoing(idx))
            .collect()
    }

    /// Outgoing connections of one node, in insertion order.
    pub fn connections_from(&self, label: &str) -> Result<Vec<Connection>> {
        let idx = self.lookup(label)?;
        Ok(self.resolved_outgoing(idx))
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of stored connections, arcs and edges together.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Find a node by label.
    pub fn node(&self, label: &str) -> Option<&Node> {
        self.index
            .get(label)
            .and_then(|&idx| self.inner.node_weight(idx))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// 0-based insertion position of a node.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.nodes().position(|n| n.label == label)
    }

    /// Cached normalized positions, if any.
    pub fn positions(&self) -> Option<&Positions> {
        self.positions.as_ref()
    }

    /// Replace the cached normalized positions.
    pub fn set_positions(&mut self, positions: Positions) {
        self.positions = Some(positions);
    }

    pub fn clear_positions(&mut self) {
        self.positions = None;
    }

    /// Cache a single normalized position.
    pub fn seed_position(&mut self, label: &str, x: f64, y: f64, index: usize) {
        self.positions
            .get_or_insert_with(HashMap::new)
            .insert(label.to_string(), Position { x, y, index });
    }

    /// Pixel positions for rendering.
    ///
    /// Uses the cached positions when every node has one and
    /// `override_positions` is off. Otherwise runs `layout` and caches the
    /// result, normalized, for later exports.
    pub fn resolve_positions(
        &mut self,
        layout: &dyn Layout,
        canvas: &Canvas,
        override_positions: bool,
    ) -> Positions {
        if !override_positions {
            if let Some(cached) = &self.positions {
                if self.nodes().all(|n| cached.contains_key(&n.label)) {
                    return denormalize_positions(cached, canvas);
                }
                tracing::warn!(
                    "Only {} of {} nodes have positions, generating a new layout",
                    cached.len(),
                    self.node_count()
                );
            }
        }

        let nodes: Vec<&Node> = self.nodes().collect();
        let generated = layout.generate_positions(&nodes, canvas);
        tracing::debug!("Generated {} positions with {} layout", generated.len(), layout.name());

        self.positions = Some(normalize_positions(&generated, canvas));
        generated
    }

    fn lookup(&self, label: &str) -> Result<NodeIndex> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))
    }

    /// Outgoing adjacency of `idx`, sorted back into insertion order.
    ///
    /// petgraph walks a node's edge list newest-first.
    fn outgoing(&self, idx: NodeIndex) -> Vec<(EdgeIndex, NodeIndex, Link)> {
        let mut edges: Vec<_> = self
            .inner
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge_ref| (edge_ref.id(), edge_ref.target(), *edge_ref.weight()))
            .collect();
        edges.sort_by_key(|(id, _, _)| *id);
        edges
    }

    fn resolved_outgoing(&self, idx: NodeIndex) -> Vec<Connection> {
        let from = &self.inner[idx].label;
        self.outgoing(idx)
            .into_iter()
            .map(|(_, target, link)| {
                Connection::new(from.clone(), self.inner[target].label.clone(), link.weight, link.directed)
            })
            .collect()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
