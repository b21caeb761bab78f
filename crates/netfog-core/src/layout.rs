//! Coordinate layouts and the pixel ↔ normalized transforms

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::model::{Node, Position, Positions};

/// Gap kept between the circular layout and the canvas edge.
const CIRCLE_MARGIN: f64 = 40.0;

/// The logical drawing area, in pixels.
///
/// Layouts place nodes inside `[min_x, max_x) × [min_y, max_y)`; the
/// normalized space divides by `max_x` and `max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Canvas {
    pub fn width(&self) -> f64 {
        self.max_x
    }

    pub fn height(&self) -> f64 {
        self.max_y
    }

    /// Value for the SVG `viewBox` attribute.
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x,
            self.min_y,
            self.max_x - self.min_x,
            self.max_y - self.min_y
        )
    }

    /// Bounds must be finite with `min < max` on both axes, and `max_x`
    /// and `max_y` positive since they divide during normalization.
    pub fn validate(&self) -> Result<(), GraphError> {
        let bounds = [self.min_x, self.max_x, self.min_y, self.max_y];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(GraphError::InvalidCanvas("bounds must be finite".to_string()));
        }
        if self.max_x <= self.min_x || self.max_y <= self.min_y {
            return Err(GraphError::InvalidCanvas(format!(
                "empty range x [{}, {}) y [{}, {})",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }
        if self.max_x <= 0.0 || self.max_y <= 0.0 {
            return Err(GraphError::InvalidCanvas(
                "max_x and max_y must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            min_x: 20.0,
            max_x: 1500.0,
            min_y: 20.0,
            max_y: 700.0,
        }
    }
}

/// A strategy that assigns pixel coordinates to a node set.
pub trait Layout {
    fn name(&self) -> &'static str;

    /// One position per node, indexed from 1 in slice order.
    fn generate_positions(&self, nodes: &[&Node], canvas: &Canvas) -> Positions;
}

/// Uniformly random placement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLayout {
    /// Fixed seed for reproducible output; fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl RandomLayout {
    pub fn seeded(seed: u64) -> Self {
        RandomLayout { seed: Some(seed) }
    }
}

impl Layout for RandomLayout {
    fn name(&self) -> &'static str {
        "random"
    }

    fn generate_positions(&self, nodes: &[&Node], canvas: &Canvas) -> Positions {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let position = Position {
                    x: sample(&mut rng, canvas.min_x, canvas.max_x),
                    y: sample(&mut rng, canvas.min_y, canvas.max_y),
                    index: i + 1,
                };
                (node.label.clone(), position)
            })
            .collect()
    }
}

/// Uniform in `[low, high)`; collapses to `low` on an empty range.
fn sample(rng: &mut StdRng, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Evenly spaced on a circle centred in the canvas, first node at the top.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularLayout;

impl Layout for CircularLayout {
    fn name(&self) -> &'static str {
        "circular"
    }

    fn generate_positions(&self, nodes: &[&Node], canvas: &Canvas) -> Positions {
        if nodes.is_empty() {
            return Positions::new();
        }

        let (cx, cy) = canvas.center();
        let radius = ((canvas.max_y - canvas.min_y).min(canvas.max_x - canvas.min_x) / 2.0 - CIRCLE_MARGIN).max(0.0);
        let step = 2.0 * PI / nodes.len() as f64;

        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let angle = -PI / 2.0 + step * i as f64;
                let position = Position {
                    x: cx + radius * angle.cos(),
                    y: cy + radius * angle.sin(),
                    index: i + 1,
                };
                (node.label.clone(), position)
            })
            .collect()
    }
}

/// Layout selector for configuration and command-line use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    #[default]
    Random,
    Circular,
}

impl LayoutKind {
    /// Build the strategy. `seed` only affects [`LayoutKind::Random`].
    pub fn build(self, seed: Option<u64>) -> Box<dyn Layout> {
        match self {
            LayoutKind::Random => Box::new(RandomLayout { seed }),
            LayoutKind::Circular => Box::new(CircularLayout),
        }
    }
}

impl FromStr for LayoutKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(LayoutKind::Random),
            "circular" | "circle" => Ok(LayoutKind::Circular),
            other => Err(GraphError::UnknownLayout(other.to_string())),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Random => write!(f, "random"),
            LayoutKind::Circular => write!(f, "circular"),
        }
    }
}

/// Pixel coordinates → `[0, 1]` relative to the canvas size.
pub fn normalize_positions(positions: &Positions, canvas: &Canvas) -> Positions {
    positions
        .iter()
        .map(|(label, p)| {
            let normalized = Position {
                x: p.x / canvas.width(),
                y: p.y / canvas.height(),
                index: p.index,
            };
            (label.clone(), normalized)
        })
        .collect()
}

/// Inverse of [`normalize_positions`].
pub fn denormalize_positions(positions: &Positions, canvas: &Canvas) -> Positions {
    positions
        .iter()
        .map(|(label, p)| {
            let pixel = Position {
                x: p.x * canvas.width(),
                y: p.y * canvas.height(),
                index: p.index,
            };
            (label.clone(), pixel)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(labels: &[&str]) -> Vec<Node> {
        labels.iter().map(|l| Node::new(*l)).collect()
    }

    #[test]
    fn test_random_layout_stays_inside_canvas() {
        let owned = nodes(&["a", "b", "c", "d", "e"]);
        let refs: Vec<&Node> = owned.iter().collect();
        let canvas = Canvas::default();

        let positions = RandomLayout::default().generate_positions(&refs, &canvas);

        assert_eq!(positions.len(), 5);
        for p in positions.values() {
            assert!(p.x >= canvas.min_x && p.x < canvas.max_x);
            assert!(p.y >= canvas.min_y && p.y < canvas.max_y);
        }
        assert_eq!(positions["a"].index, 1);
        assert_eq!(positions["e"].index, 5);
    }

    #[test]
    fn test_seeded_random_layout_is_reproducible() {
        let owned = nodes(&["a", "b", "c"]);
        let refs: Vec<&Node> = owned.iter().collect();
        let canvas = Canvas::default();

        let first = RandomLayout::seeded(7).generate_positions(&refs, &canvas);
        let second = RandomLayout::seeded(7).generate_positions(&refs, &canvas);
        assert_eq!(first, second);
    }

    #[test]
    fn test_circular_layout_is_evenly_spaced() {
        let owned = nodes(&["n", "e", "s", "w"]);
        let refs: Vec<&Node> = owned.iter().collect();
        let canvas = Canvas::default();
        let (cx, cy) = canvas.center();

        let positions = CircularLayout.generate_positions(&refs, &canvas);

        let radii: Vec<f64> = ["n", "e", "s", "w"]
            .iter()
            .map(|l| ((positions[*l].x - cx).powi(2) + (positions[*l].y - cy).powi(2)).sqrt())
            .collect();
        for r in &radii {
            assert!((r - radii[0]).abs() < 1e-9);
        }

        // First node sits straight above the centre, the third straight below.
        assert!((positions["n"].x - cx).abs() < 1e-9);
        assert!(positions["n"].y < cy);
        assert!((positions["s"].x - cx).abs() < 1e-9);
        assert!(positions["s"].y > cy);
        assert_eq!(positions["w"].index, 4);
    }

    #[test]
    fn test_circular_layout_empty() {
        assert!(CircularLayout.generate_positions(&[], &Canvas::default()).is_empty());
    }

    #[test]
    fn test_normalize_round_trip() {
        let canvas = Canvas::default();
        let mut pixels = Positions::new();
        pixels.insert("a".to_string(), Position { x: 20.0, y: 20.0, index: 1 });
        pixels.insert("b".to_string(), Position { x: 1499.9, y: 699.9, index: 2 });
        pixels.insert("c".to_string(), Position { x: 733.3, y: 123.456, index: 3 });

        let normalized = normalize_positions(&pixels, &canvas);
        for p in normalized.values() {
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
        }

        let restored = denormalize_positions(&normalized, &canvas);
        for (label, original) in &pixels {
            let back = restored[label];
            assert!((back.x - original.x).abs() < 1e-9);
            assert!((back.y - original.y).abs() < 1e-9);
            assert_eq!(back.index, original.index);
        }
    }

    #[test]
    fn test_layout_kind_parsing() {
        assert_eq!("random".parse::<LayoutKind>(), Ok(LayoutKind::Random));
        assert_eq!("Circular".parse::<LayoutKind>(), Ok(LayoutKind::Circular));
        assert_eq!(
            "spring".parse::<LayoutKind>(),
            Err(GraphError::UnknownLayout("spring".to_string()))
        );
        assert_eq!(LayoutKind::Circular.to_string(), "circular");
    }

    #[test]
    fn test_canvas_validation() {
        assert_eq!(Canvas::default().validate(), Ok(()));

        let inverted = Canvas { min_x: 20.0, max_x: 10.0, ..Canvas::default() };
        assert!(matches!(inverted.validate(), Err(GraphError::InvalidCanvas(_))));

        let flat = Canvas { min_y: 700.0, ..Canvas::default() };
        assert!(flat.validate().is_err());

        let negative = Canvas { min_x: -100.0, max_x: 0.0, ..Canvas::default() };
        assert!(negative.validate().is_err());

        let infinite = Canvas { max_y: f64::INFINITY, ..Canvas::default() };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_random_layout_on_empty_range() {
        let owned = nodes(&["a", "b"]);
        let refs: Vec<&Node> = owned.iter().collect();
        let canvas = Canvas { min_x: 20.0, max_x: 10.0, ..Canvas::default() };

        let positions = RandomLayout::seeded(1).generate_positions(&refs, &canvas);
        assert_eq!(positions["a"].x, 20.0);
        assert!(positions["b"].y >= canvas.min_y && positions["b"].y < canvas.max_y);
    }

    #[test]
    fn test_view_box() {
        assert_eq!(Canvas::default().view_box(), "20 20 1480 680");
    }
}
