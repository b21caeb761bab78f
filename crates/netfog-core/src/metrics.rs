//! Degree, centrality, density and weight statistics
//!
//! Everything here is recomputed from [`Graph::get_connections`] on each
//! call; nothing is cached, so metrics stay correct after mutation.

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::model::*;

impl Graph {
    /// Sum of all connection weights, arcs and edges together.
    pub fn total_weight(&self) -> f64 {
        self.get_connections().iter().map(|c| c.weight).sum()
    }

    pub fn mean_weight(&self) -> Result<f64> {
        let count = self.edge_count();
        if count == 0 {
            return Err(GraphError::NoConnections);
        }
        Ok(self.total_weight() / count as f64)
    }

    /// `(m * edges) / (n * (n - 1))` with `m = 2` for directed, `1` otherwise.
    pub fn density(&self, directed: bool) -> Result<f64> {
        let nodes = self.node_count();
        if nodes <= 1 {
            return Err(GraphError::TooFewNodes { count: nodes });
        }
        let multiplier = if directed { 2.0 } else { 1.0 };
        let nodes = nodes as f64;
        Ok((multiplier * self.edge_count() as f64) / (nodes * (nodes - 1.0)))
    }

    /// `(m * edges) / n` with `m = 1` for directed, `2` otherwise.
    ///
    /// Undefined below two nodes, like [`Graph::density`].
    pub fn average_degree(&self, directed: bool) -> Result<f64> {
        let nodes = self.node_count();
        if nodes <= 1 {
            return Err(GraphError::TooFewNodes { count: nodes });
        }
        let multiplier = if directed { 1.0 } else { 2.0 };
        Ok((multiplier * self.edge_count() as f64) / nodes as f64)
    }

    pub fn compute_degrees(&self, label: &str) -> Result<Degrees> {
        if !self.contains(label) {
            return Err(GraphError::NodeNotFound(label.to_string()));
        }
        Ok(degrees_in(&self.get_connections(), label))
    }

    /// Degrees of every node, in insertion order.
    pub fn all_degrees(&self) -> Vec<(String, Degrees)> {
        let connections = self.get_connections();
        self.nodes()
            .map(|node| (node.label.clone(), degrees_in(&connections, &node.label)))
            .collect()
    }

    /// Like [`Graph::compute_degrees`], summing weights instead of counting.
    pub fn node_strength(&self, label: &str) -> Result<Strength> {
        if !self.contains(label) {
            return Err(GraphError::NodeNotFound(label.to_string()));
        }

        let mut strength = Strength::default();
        for conn in self.get_connections() {
            if conn.directed {
                if conn.from == label {
                    strength.out_strength += conn.weight;
                    strength.total_strength += conn.weight;
                }
                if conn.to == label {
                    strength.in_strength += conn.weight;
                    strength.total_strength += conn.weight;
                }
            } else if conn.touches(label) {
                strength.undirected_strength += conn.weight;
            }
        }
        Ok(strength)
    }

    /// Degrees over `node_count - 1`; all zero for graphs of one node.
    pub fn centrality(&self, label: &str) -> Result<Centrality> {
        let degrees = self.compute_degrees(label)?;
        let nodes = self.node_count();
        if nodes <= 1 {
            return Ok(Centrality::default());
        }

        let max_degree = (nodes - 1) as f64;
        Ok(Centrality {
            in_centrality: degrees.in_degree as f64 / max_degree,
            out_centrality: degrees.out_degree as f64 / max_degree,
            total_centrality: degrees.total_degree as f64 / max_degree,
            undirected_centrality: degrees.undirected_degree as f64 / max_degree,
        })
    }

    /// Fraction of nodes per observed degree value. Unobserved values are absent.
    pub fn degree_distribution(&self) -> DegreeDistribution {
        let degrees = self.all_degrees();
        let nodes = self.node_count() as f64;

        let mut in_counts: BTreeMap<usize, usize> = BTreeMap::new();
        let mut out_counts: BTreeMap<usize, usize> = BTreeMap::new();
        let mut undirected_counts: BTreeMap<usize, usize> = BTreeMap::new();

        for (_, d) in &degrees {
            *in_counts.entry(d.in_degree).or_insert(0) += 1;
            *out_counts.entry(d.out_degree).or_insert(0) += 1;
            *undirected_counts.entry(d.undirected_degree).or_insert(0) += 1;
        }

        let to_fractions = |counts: BTreeMap<usize, usize>| -> BTreeMap<usize, f64> {
            counts
                .into_iter()
                .map(|(degree, count)| (degree, count as f64 / nodes))
                .collect()
        };

        DegreeDistribution {
            in_distribution: to_fractions(in_counts),
            out_distribution: to_fractions(out_counts),
            undirected_distribution: to_fractions(undirected_counts),
        }
    }

    /// Shannon entropy (bits) of each degree distribution.
    pub fn degree_entropy(&self) -> DegreeEntropy {
        let distribution = self.degree_distribution();
        DegreeEntropy {
            in_entropy: shannon_entropy(&distribution.in_distribution),
            out_entropy: shannon_entropy(&distribution.out_distribution),
            undirected_entropy: shannon_entropy(&distribution.undirected_distribution),
        }
    }

    /// Upper bound of [`Graph::degree_entropy`]: every node with a distinct degree.
    pub fn max_degree_entropy(&self) -> Result<f64> {
        match self.node_count() {
            0 => Err(GraphError::EmptyGraph),
            n => Ok((n as f64).log2()),
        }
    }

    /// Moment coefficient of skewness of each per-node degree sequence.
    ///
    /// A sequence with zero variance has skewness `0`.
    pub fn degree_skewness(&self) -> Result<DegreeSkewness> {
        if self.node_count() == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let degrees = self.all_degrees();
        let sequence = |pick: fn(&Degrees) -> usize| -> Vec<f64> {
            degrees.iter().map(|(_, d)| pick(d) as f64).collect()
        };

        Ok(DegreeSkewness {
            in_skewness: skewness(&sequence(|d| d.in_degree)),
            out_skewness: skewness(&sequence(|d| d.out_degree)),
            undirected_skewness: skewness(&sequence(|d| d.undirected_degree)),
        })
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            total_weight: self.total_weight(),
            mean_weight: self.mean_weight().ok(),
            density: self.density(false).ok(),
            directed_density: self.density(true).ok(),
            average_degree: self.average_degree(false).ok(),
            directed_average_degree: self.average_degree(true).ok(),
            degree_distribution: self.degree_distribution(),
            degree_entropy: self.degree_entropy(),
            degree_skewness: self.degree_skewness().ok(),
        }
    }
}

fn degrees_in(connections: &[Connection], label: &str) -> Degrees {
    let mut degrees = Degrees::default();

    for conn in connections {
        if conn.directed {
            if conn.from == label {
                degrees.out_degree += 1;
                degrees.total_degree += 1;
            }
            if conn.to == label {
                degrees.in_degree += 1;
                degrees.total_degree += 1;
            }
            continue;
        }

        if conn.touches(label) {
            degrees.undirected_degree += 1;
        }
    }

    degrees
}

fn shannon_entropy(distribution: &BTreeMap<usize, f64>) -> f64 {
    distribution
        .values()
        .filter(|&&p| p > 0.0)
        .map(|&p| -p * p.log2())
        .sum()
}

fn skewness(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let moment = |k: i32| values.iter().map(|v| (v - mean).powi(k)).sum::<f64>() / n;

    let variance = moment(2);
    if variance == 0.0 {
        return 0.0;
    }
    moment(3) / variance.powf(1.5)
}
