//! Weighted mixed graph model, metrics engine and layouts

pub mod error;
pub mod model;
pub mod graph;
pub mod builders;
pub mod metrics;
pub mod layout;


#[cfg(test)]
pub mod test_utils;

pub use error::GraphError;
pub use model::{
    Node, Link, Connection, Position, Positions, Degrees, Strength, Centrality, DegreeDistribution,
    DegreeEntropy, DegreeSkewness, GraphSummary, IntermediateGraph, IntermediateNode, IntermediateLink, DEFAULT_WEIGHT,
};
pub use graph::Graph;
pub use layout::{
    Canvas, Layout, LayoutKind, RandomLayout, CircularLayout, normalize_positions, denormalize_positions,
};
