use netfog_core::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// A node has no resolved coordinate.
    #[error("no position for node {0}")]
    MissingPosition(String),

    #[error("invalid render config: {0}")]
    Config(#[from] toml::de::Error),

    /// Rejected canvas bounds and other graph-level failures.
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("embedded asset missing: {0}")]
    MissingAsset(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
