use netfog_core::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: unknown vertex index {index}")]
    UnknownIndex { line: usize, index: String },

    #[error("invalid JSON graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("unsupported graph file: {0}")]
    UnsupportedExtension(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        FormatError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
