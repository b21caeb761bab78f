//! Core data structures for the weighted mixed graph

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Weight given to a connection when none is specified.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A vertex. Outgoing connections live in the graph's adjacency, keyed by this node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub label: String,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Node { label: label.into() }
    }
}

/// Payload stored on each outgoing adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub weight: f64,
    /// `true` for an arc, `false` for an edge read in both directions.
    pub directed: bool,
}

/// Flattened, label-resolved view of a single connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub directed: bool,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64, directed: bool) -> Self {
        Connection {
            from: from.into(),
            to: to.into(),
            weight,
            directed,
        }
    }

    /// Whether `label` is either endpoint.
    pub fn touches(&self, label: &str) -> bool {
        self.from == label || self.to == label
    }
}

/// A node coordinate plus its 1-based rendering index.
///
/// The same shape is used for pixel space and for the normalized `[0, 1]`
/// space; which one a given map holds is decided by the function that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub index: usize,
}

/// Label → position.
pub type Positions = HashMap<String, Position>;

/// Per-node connection counts. Arc and edge counters never mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degrees {
    pub in_degree: usize,
    pub out_degree: usize,
    /// `in_degree + out_degree`, arcs only.
    pub total_degree: usize,
    pub undirected_degree: usize,
}

/// Weighted counterpart of [`Degrees`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub in_strength: f64,
    pub out_strength: f64,
    pub total_strength: f64,
    pub undirected_strength: f64,
}

/// [`Degrees`] divided by `node_count - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Centrality {
    pub in_centrality: f64,
    pub out_centrality: f64,
    pub total_centrality: f64,
    pub undirected_centrality: f64,
}

/// Degree value → fraction of nodes with that degree, one map per degree kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeDistribution {
    pub in_distribution: BTreeMap<usize, f64>,
    pub out_distribution: BTreeMap<usize, f64>,
    pub undirected_distribution: BTreeMap<usize, f64>,
}

/// Shannon entropy, in bits, of each degree distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeEntropy {
    pub in_entropy: f64,
    pub out_entropy: f64,
    pub undirected_entropy: f64,
}

/// Skewness of the in, out and undirected degree sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DegreeSkewness {
    pub in_skewness: f64,
    pub out_skewness: f64,
    pub undirected_skewness: f64,
}

/// Everything the metrics engine knows about a graph, in one serializable value.
///
/// Ratio metrics that are undefined for the graph are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_weight: f64,
    pub mean_weight: Option<f64>,
    pub density: Option<f64>,
    pub directed_density: Option<f64>,
    pub average_degree: Option<f64>,
    pub directed_average_degree: Option<f64>,
    pub degree_distribution: DegreeDistribution,
    pub degree_entropy: DegreeEntropy,
    pub degree_skewness: Option<DegreeSkewness>,
}

// ── Intermediate dictionary ─────────────────────────────────

/// Format-neutral shape every reader produces and every writer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntermediateGraph {
    pub nodes: Vec<IntermediateNode>,
    #[serde(default)]
    pub edges: Vec<IntermediateLink>,
    #[serde(default)]
    pub arcs: Vec<IntermediateLink>,
}

/// A node entry; `x`/`y` are normalized coordinates when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateNode {
    pub node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl IntermediateNode {
    pub fn new(node: impl Into<String>) -> Self {
        IntermediateNode {
            node: node.into(),
            x: None,
            y: None,
        }
    }

    pub fn with_position(node: impl Into<String>, x: f64, y: f64) -> Self {
        IntermediateNode {
            node: node.into(),
            x: Some(x),
            y: Some(y),
        }
    }
}

/// A connection entry, addressed by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateLink {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl IntermediateLink {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        IntermediateLink {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}
