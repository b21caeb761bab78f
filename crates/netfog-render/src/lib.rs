//! SVG drawing, styles and the interactive HTML page

pub mod error;
pub mod style;
pub mod config;
pub mod svg;
pub mod renderer;
pub mod html;


pub use error::RenderError;
pub use style::{GraphStyle, NodeStyle, LineStyle, MarkerStyle};
pub use config::RenderConfig;
pub use svg::{SvgBuilder, escape_xml};
pub use renderer::{Renderer, render_svg, render_graph, MIN_WEIGHT};
pub use html::HtmlDocument;
