//! SVG document builder.

use std::fmt::Write;

use crate::style::MarkerStyle;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Escape text content and attribute values for XML.
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

fn write_attrs(output: &mut String, attrs: &[(&str, String)]) {
    for (key, value) in attrs {
        let _ = write!(output, " {}=\"{}\"", key, escape_xml(value));
    }
}

/// Builds a standalone `<svg>` document line by line.
pub struct SvgBuilder {
    output: String,
    indent: usize,
}

impl SvgBuilder {
    pub fn new(view_box: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(
            output,
            "<svg xmlns=\"{SVG_NAMESPACE}\" viewBox=\"{}\">",
            escape_xml(view_box)
        );
        Self { output, indent: 1 }
    }

    /// Add the arrowhead definition referenced as `url(#marker)`.
    pub fn marker_defs(&mut self, marker: &MarkerStyle) -> &mut Self {
        self.open("defs", &[]);
        self.open(
            "marker",
            &[
                ("id", "marker".to_string()),
                ("markerWidth", marker.width.to_string()),
                ("markerHeight", marker.height.to_string()),
                ("refX", marker.ref_x.to_string()),
                ("refY", marker.ref_y.to_string()),
                ("orient", "auto".to_string()),
                ("markerUnits", "strokeWidth".to_string()),
            ],
        );
        self.empty(
            "path",
            &[("d", marker.path.clone()), ("fill", marker.fill.clone())],
        );
        self.close("marker");
        self.close("defs");
        self
    }

    /// Add a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, String)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "<{name}");
        write_attrs(&mut self.output, attrs);
        self.output.push_str("/>\n");
        self
    }

    /// Add an element holding escaped text.
    pub fn text(&mut self, name: &str, attrs: &[(&str, String)], content: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "<{name}");
        write_attrs(&mut self.output, attrs);
        let _ = writeln!(self.output, ">{}</{name}>", escape_xml(content));
        self
    }

    fn open(&mut self, name: &str, attrs: &[(&str, String)]) {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "<{name}");
        write_attrs(&mut self.output, attrs);
        self.output.push_str(">\n");
        self.indent += 1;
    }

    fn close(&mut self, name: &str) {
        self.indent = self.indent.saturating_sub(1);
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "</{name}>");
    }

    /// Close the document and return it.
    pub fn finish(mut self) -> String {
        self.output.push_str("</svg>\n");
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\"'"), "a&lt;b &amp; &quot;c&quot;&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_builder_nesting() {
        let mut builder = SvgBuilder::new("0 0 10 10");
        builder.marker_defs(&MarkerStyle::default());
        builder.text("text", &[("x", "1".to_string())], "<hi>");
        let svg = builder.finish();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 10 10\">"));
        assert!(svg.contains("  <defs>\n    <marker id=\"marker\""));
        assert!(svg.contains("      <path d=\"M0,0 L0,6 L9,3 z\" fill=\"black\"/>"));
        assert!(svg.contains("<text x=\"1\">&lt;hi&gt;</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
