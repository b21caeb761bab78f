//! Graph file format trait and selection

use std::fmt;
use std::path::Path;

use netfog_core::IntermediateGraph;

use crate::error::{FormatError, Result};
use crate::json::JsonFormat;
use crate::net::NetFormat;

/// A text serialization of the intermediate graph dictionary.
pub trait GraphFormat {
    fn name(&self) -> &'static str;

    fn read(&self, text: &str) -> Result<IntermediateGraph>;

    fn write(&self, graph: &IntermediateGraph) -> Result<String>;

    /// Whether every node must carry coordinates before writing.
    fn requires_positions(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Net,
    Json,
}

impl FormatKind {
    /// Pick the format from a file extension (`.net`, `.json`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("net") => Ok(FormatKind::Net),
            Some("json") => Ok(FormatKind::Json),
            _ => Err(FormatError::UnsupportedExtension(path.display().to_string())),
        }
    }

    pub fn codec(self) -> Box<dyn GraphFormat> {
        match self {
            FormatKind::Net => Box::new(NetFormat),
            FormatKind::Json => Box::new(JsonFormat),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec().name())
    }
}
