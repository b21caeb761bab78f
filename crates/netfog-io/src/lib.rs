//! Reading and writing `.net` and JSON graph files

pub mod error;
pub mod format;
pub mod net;
pub mod json;
pub mod files;


pub use error::FormatError;
pub use format::{GraphFormat, FormatKind};
pub use net::NetFormat;
pub use json::JsonFormat;
pub use files::{read_graph, write_graph, read_matrix, write_artifact};
