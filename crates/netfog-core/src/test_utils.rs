//! Test fixtures for Netfog

use crate::graph::Graph;

/// Four nodes, three edges and two arcs:
/// `node1-node2 (2)`, `node3->node4 (4)`, `node4-node1 (5.5)`,
/// `node3->node2 (1.2)`, `node2-node3 (1.6)`.
pub fn create_mixed_graph() -> Graph {
    let mut graph = Graph::new();
    for label in ["node1", "node2", "node3", "node4"] {
        graph.add_node(label);
    }

    graph.create_connection("node1", "node2", 2.0, false).unwrap();
    graph.create_connection("node3", "node4", 4.0, true).unwrap();
    graph.create_connection("node4", "node1", 5.5, false).unwrap();
    graph.create_connection("node3", "node2", 1.2, true).unwrap();
    graph.create_connection("node2", "node3", 1.6, false).unwrap();

    graph
}

/// Same topology as [`create_mixed_graph`], every connection undirected.
pub fn create_undirected_graph() -> Graph {
    let mut graph = Graph::new();
    for label in ["node1", "node2", "node3", "node4"] {
        graph.add_node(label);
    }

    graph.create_connection("node1", "node2", 2.0, false).unwrap();
    graph.create_connection("node3", "node4", 4.0, false).unwrap();
    graph.create_connection("node4", "node1", 5.5, false).unwrap();
    graph.create_connection("node3", "node2", 1.2, false).unwrap();
    graph.create_connection("node2", "node3", 1.6, false).unwrap();

    graph
}

/// Graph with the given labels and no connections.
pub fn create_isolated_nodes(labels: &[&str]) -> Graph {
    let mut graph = Graph::new();
    for label in labels {
        graph.add_node(*label);
    }
    graph
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mixed_graph() {
        let graph = create_mixed_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 5);
    }
}
