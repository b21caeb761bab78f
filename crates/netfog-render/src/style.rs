//! Visual style for rendered graphs

use serde::{Deserialize, Serialize};

/// Circle and label appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    pub fill_color: String,
    pub border_color: String,
    pub radius: f64,
    /// Vertical distance from the circle centre to the label baseline.
    pub label_offset: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            fill_color: "blue".to_string(),
            border_color: "blue".to_string(),
            radius: 20.0,
            label_offset: 35.0,
        }
    }
}

/// Connection stroke appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: String,
    pub min_width: f64,
    pub max_width: f64,
    /// Scale stroke width with connection weight.
    pub dynamic_weight_size: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "black".to_string(),
            min_width: 1.0,
            max_width: 5.0,
            dynamic_weight_size: true,
        }
    }
}

impl LineStyle {
    /// Stroke width for `weight`, interpolated linearly over `[min_weight, max_weight]`.
    pub fn width(&self, weight: f64, min_weight: f64, max_weight: f64) -> f64 {
        if !self.dynamic_weight_size || min_weight == max_weight {
            return self.min_width;
        }

        let normalized = (weight - min_weight) / (max_weight - min_weight);
        self.min_width + normalized * (self.max_width - self.min_width)
    }
}

/// Arrowhead drawn at the end of arcs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// SVG path data of the arrowhead.
    pub path: String,
    pub fill: String,
    pub width: f64,
    pub height: f64,
    pub ref_x: f64,
    pub ref_y: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            path: "M0,0 L0,6 L9,3 z".to_string(),
            fill: "black".to_string(),
            width: 30.0,
            height: 30.0,
            ref_x: 29.0,
            ref_y: 3.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    pub node: NodeStyle,
    pub line: LineStyle,
    pub marker: MarkerStyle,
}
