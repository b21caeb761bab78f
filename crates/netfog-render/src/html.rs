//! Interactive HTML page around a rendered SVG

use rust_embed::RustEmbed;

use crate::error::{RenderError, Result};
use crate::svg::escape_xml;

const SCRIPT: &str = "script.js";

/// Page assets, embedded at compile time.
#[derive(RustEmbed)]
#[folder = "assets"]
struct PageAssets;

/// A standalone page showing one graph with drag, pan and zoom.
pub struct HtmlDocument {
    title: String,
    svg: String,
}

impl HtmlDocument {
    pub fn new(svg: impl Into<String>) -> Self {
        Self {
            title: "netfog".to_string(),
            svg: svg.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn render(&self) -> Result<String> {
        let script = PageAssets::get(SCRIPT).ok_or(RenderError::MissingAsset(SCRIPT))?;
        let script = String::from_utf8_lossy(&script.data);

        Ok(format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{}</title>\n\
             <style>html, body {{ margin: 0; height: 100%; }} svg {{ width: 100%; height: 100%; cursor: grab; }}</style>\n\
             </head>\n\
             <body>\n\
             {}\
             <script>\n{}</script>\n\
             </body>\n\
             </html>\n",
            escape_xml(&self.title),
            self.svg,
            script
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_exist() {
        assert!(PageAssets::get(SCRIPT).is_some());
        assert!(PageAssets::get("nonexistent.file").is_none());
    }

    #[test]
    fn test_page_wraps_svg_and_script() {
        let page = HtmlDocument::new("<svg></svg>\n")
            .with_title("a & b")
            .render()
            .unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>a &amp; b</title>"));
        assert!(page.contains("<svg></svg>\n<script>"));
        assert!(page.contains("addEventListener(\"wheel\""));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
