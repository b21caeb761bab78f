//! Reading and writing graphs on disk

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use netfog_core::{Canvas, Graph, Layout};

use crate::error::Result;
use crate::format::FormatKind;

/// Load a graph, choosing the format from the file extension.
pub fn read_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let kind = FormatKind::from_path(path)?;
    let text = fs::read_to_string(path)?;

    let dict = kind.codec().read(&text)?;
    let graph = Graph::from_intermediate(&dict)?;
    tracing::debug!("Loaded {} graph from {}", kind, path.display());
    Ok(graph)
}

/// Save a graph, choosing the format from the file extension.
///
/// Formats that always carry coordinates get a layout from `layout`
/// when the graph has none cached.
pub fn write_graph(
    graph: &mut Graph,
    path: impl AsRef<Path>,
    layout: &dyn Layout,
    canvas: &Canvas,
) -> Result<()> {
    let path = path.as_ref();
    let codec = FormatKind::from_path(path)?.codec();

    if codec.requires_positions() {
        graph.resolve_positions(layout, canvas, false);
    }

    let text = codec.write(&graph.to_intermediate())?;
    write_artifact(path, &text)
}

/// Read a square weight matrix stored as a JSON array of rows.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&text)?)
}

/// Write a finished artifact in one pass.
pub fn write_artifact(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
