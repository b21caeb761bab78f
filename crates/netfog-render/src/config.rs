//! Render configuration loaded from TOML
//!
//! ```toml
//! [canvas]
//! max_x = 1200.0
//!
//! [style.node]
//! fill_color = "teal"
//!
//! [style.line]
//! dynamic_weight_size = false
//! ```
//!
//! Every table and field is optional. The canvas must span a non-empty
//! range on both axes.

use std::fs;
use std::path::Path;

use netfog_core::Canvas;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::style::GraphStyle;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas: Canvas,
    pub style: GraphStyle,
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.canvas.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded render config from {}", path.display());
        Ok(config)
    }
}
