//! JSON graph format
//!
//! Nodes accept `label` or `node`; connections accept `source`/`from` and
//! `target`/`to`. The writer always uses `label`, `source` and `target`.

use netfog_core::{DEFAULT_WEIGHT, IntermediateGraph, IntermediateLink, IntermediateNode};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::GraphFormat;

#[derive(Debug, Serialize, Deserialize)]
struct JsonNode {
    #[serde(alias = "node")]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConnection {
    #[serde(alias = "from")]
    source: String,
    #[serde(alias = "to")]
    target: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonGraph {
    nodes: Vec<JsonNode>,
    #[serde(default)]
    edges: Vec<JsonConnection>,
    #[serde(default)]
    arcs: Vec<JsonConnection>,
}

impl From<JsonConnection> for IntermediateLink {
    fn from(c: JsonConnection) -> Self {
        IntermediateLink::new(c.source, c.target, c.weight)
    }
}

impl From<&IntermediateLink> for JsonConnection {
    fn from(link: &IntermediateLink) -> Self {
        JsonConnection {
            source: link.from.clone(),
            target: link.to.clone(),
            weight: link.weight,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl GraphFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn read(&self, text: &str) -> Result<IntermediateGraph> {
        let parsed: JsonGraph = serde_json::from_str(text)?;

        Ok(IntermediateGraph {
            nodes: parsed
                .nodes
                .into_iter()
                .map(|n| IntermediateNode {
                    node: n.label,
                    x: n.x,
                    y: n.y,
                })
                .collect(),
            edges: parsed.edges.into_iter().map(Into::into).collect(),
            arcs: parsed.arcs.into_iter().map(Into::into).collect(),
        })
    }

    fn write(&self, graph: &IntermediateGraph) -> Result<String> {
        let out = JsonGraph {
            nodes: graph
                .nodes
                .iter()
                .map(|n| JsonNode {
                    label: n.node.clone(),
                    x: n.x,
                    y: n.y,
                })
                .collect(),
            edges: graph.edges.iter().map(Into::into).collect(),
            arcs: graph.arcs.iter().map(Into::into).collect(),
        };
        Ok(serde_json::to_string_pretty(&out)?)
    }
}
