//! Error type for graph construction and metric queries

use thiserror::Error;

/// Failures raised by the graph model and its metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A connection or metric referenced a label that is not in the graph.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// Mean weight needs at least one connection.
    #[error("graph has no connections")]
    NoConnections,

    /// Density and average degree need at least two nodes.
    #[error("graph needs at least two nodes, found {count}")]
    TooFewNodes { count: usize },

    /// Entropy bounds and skewness need at least one node.
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("malformed adjacency matrix: {0}")]
    MalformedMatrix(String),

    /// Canvas bounds that enclose no area or cannot be normalized against.
    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),

    #[error("unknown layout: {0}")]
    UnknownLayout(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
