//! Line-oriented `.net` format
//!
//! ```text
//! *vertices 3
//! 1 "a" 0.25 0.5
//! 2 "b"
//! 3 "c"
//! *edges
//! 1 2 2
//! *arcs
//! 3 1 1.5
//! ```
//!
//! Coordinates are normalized. A quoted label runs from the first to the
//! last quote on its line, so labels may contain `"`. Section headers match
//! case-insensitively, blank lines and `%` comments are skipped, and a
//! missing weight is 1.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

use netfog_core::{DEFAULT_WEIGHT, GraphError, IntermediateGraph, IntermediateLink, IntermediateNode};
use regex::Regex;

use crate::error::{FormatError, Result};
use crate::format::GraphFormat;

static VERTEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\S+)\s+(?:"(.*)"|(\S+))(?:\s+(\S+)\s+(\S+))?\s*$"#).expect("valid vertex regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Edges,
    Arcs,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        let keyword = line.split_whitespace().next()?.to_ascii_lowercase();
        match keyword.as_str() {
            "*vertices" => Some(Section::Vertices),
            "*edges" => Some(Section::Edges),
            "*arcs" => Some(Section::Arcs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NetFormat;

impl NetFormat {
    fn parse_vertex(line_no: usize, line: &str) -> Result<(String, IntermediateNode)> {
        let caps = VERTEX_RE
            .captures(line)
            .ok_or_else(|| FormatError::parse(line_no, format!("malformed vertex line: {line}")))?;

        let index = caps[1].to_string();
        let label = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or_default();

        let node = match (caps.get(4), caps.get(5)) {
            (Some(x), Some(y)) => {
                let x = parse_number(line_no, x.as_str(), "x coordinate")?;
                let y = parse_number(line_no, y.as_str(), "y coordinate")?;
                IntermediateNode::with_position(label, x, y)
            }
            _ => IntermediateNode::new(label),
        };

        Ok((index, node))
    }

    fn parse_link(
        line_no: usize,
        line: &str,
        labels: &HashMap<String, String>,
    ) -> Result<IntermediateLink> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(FormatError::parse(
                line_no,
                format!("expected `<from> <to> [weight]`, got: {line}"),
            ));
        }

        let resolve = |index: &str| {
            labels.get(index).cloned().ok_or_else(|| FormatError::UnknownIndex {
                line: line_no,
                index: index.to_string(),
            })
        };

        let weight = match fields.get(2) {
            Some(raw) => parse_number(line_no, raw, "weight")?,
            None => DEFAULT_WEIGHT,
        };

        Ok(IntermediateLink::new(resolve(fields[0])?, resolve(fields[1])?, weight))
    }
}

fn parse_number(line_no: usize, raw: &str, what: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| FormatError::parse(line_no, format!("invalid {what}: {raw}")))
}

impl GraphFormat for NetFormat {
    fn name(&self) -> &'static str {
        "net"
    }

    fn read(&self, text: &str) -> Result<IntermediateGraph> {
        let mut graph = IntermediateGraph::default();
        let mut labels: HashMap<String, String> = HashMap::new();
        let mut declared = None;
        let mut section = Section::Preamble;

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('%') {
                continue;
            }

            if line.starts_with('*') {
                section = Section::from_header(line)
                    .ok_or_else(|| FormatError::parse(line_no, format!("unknown section: {line}")))?;
                if section == Section::Vertices {
                    declared = line.split_whitespace().nth(1).and_then(|n| n.parse::<usize>().ok());
                }
                continue;
            }

            match section {
                Section::Preamble => {
                    return Err(FormatError::parse(line_no, "data before any section header"));
                }
                Section::Vertices => {
                    let (index, node) = Self::parse_vertex(line_no, line)?;
                    labels.insert(index, node.node.clone());
                    graph.nodes.push(node);
                }
                Section::Edges => graph.edges.push(Self::parse_link(line_no, line, &labels)?),
                Section::Arcs => graph.arcs.push(Self::parse_link(line_no, line, &labels)?),
            }
        }

        if let Some(count) = declared {
            if count != graph.nodes.len() {
                tracing::warn!(
                    "*vertices declares {} nodes but {} were listed",
                    count,
                    graph.nodes.len()
                );
            }
        }

        tracing::debug!(
            "Read net graph: {} nodes, {} edges, {} arcs",
            graph.nodes.len(),
            graph.edges.len(),
            graph.arcs.len()
        );
        Ok(graph)
    }

    fn write(&self, graph: &IntermediateGraph) -> Result<String> {
        let indices: HashMap<&str, usize> = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.node.as_str(), i + 1))
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "*vertices {}", graph.nodes.len());
        for (i, node) in graph.nodes.iter().enumerate() {
            match (node.x, node.y) {
                (Some(x), Some(y)) if x != 0.0 || y != 0.0 => {
                    let _ = writeln!(out, "{} \"{}\" {} {}", i + 1, node.node, x, y);
                }
                _ => {
                    let _ = writeln!(out, "{} \"{}\"", i + 1, node.node);
                }
            }
        }

        for (header, links) in [("*edges", &graph.edges), ("*arcs", &graph.arcs)] {
            if links.is_empty() {
                continue;
            }
            out.push_str(header);
            out.push('\n');
            for link in links {
                let from = indices
                    .get(link.from.as_str())
                    .ok_or_else(|| GraphError::NodeNotFound(link.from.clone()))?;
                let to = indices
                    .get(link.to.as_str())
                    .ok_or_else(|| GraphError::NodeNotFound(link.to.clone()))?;
                let _ = writeln!(out, "{} {} {}", from, to, link.weight);
            }
        }

        Ok(out)
    }

    fn requires_positions(&self) -> bool {
        true
    }
}
