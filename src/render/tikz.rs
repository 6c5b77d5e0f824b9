//! TikZ rendering for Xournal++ documents.
//!
//! Produces a standalone LaTeX document drawing the first page of the
//! note as TikZ commands. Warnings are written into the output as `%`
//! comment lines, which LaTeX ignores, and mirrored to the `log` facade.
//! The only fatal condition is a document without any page.

use crate::error::{Error, Result};
use crate::model::{Document, Item, Point, Stroke, TexImage, TextLabel};

/// Xournal++ coordinates shrink by this factor on the way to TikZ.
const COORDINATE_SCALE: f64 = 30.0;

/// Declared stroke widths are tenths of a millimeter.
const WIDTH_SCALE: f64 = 10.0;

/// Draw and fill opacity applied to highlighter strokes and fills.
const HALF_OPACITY: f64 = 0.5;

/// Baseline skip factor of the `\fontsize` command.
const BASELINE_FACTOR: f64 = 1.2;

const PREAMBLE: &str = "\\documentclass{standalone}\n\
\\usepackage{tikz}\n\
\\usepackage{amsmath}\n\
\\usepackage{amssymb}\n\
\\begin{document}\n\
\\begin{tikzpicture}\n";

const CLOSING: &str = "\\end{tikzpicture}\n\\end{document}\n";

/// Convert a document to a standalone TikZ document.
pub fn to_tikz(doc: &Document) -> Result<String> {
    let renderer = TikzRenderer::new();
    renderer.render(doc)
}

/// TikZ renderer.
///
/// Owns the output buffer and the color counter for one conversion pass;
/// a fresh renderer always numbers colors from `color1` again.
pub struct TikzRenderer {
    output: String,
    color_counter: usize,
}

impl TikzRenderer {
    /// Create a new TikZ renderer.
    pub fn new() -> Self {
        Self {
            output: String::new(),
            color_counter: 0,
        }
    }

    /// Render the first page of a document.
    ///
    /// Returns [`Error::NoPages`] without emitting anything when the
    /// document has no page. Every page beyond the first produces one
    /// warning comment and is otherwise ignored.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        let page = doc.first_page().ok_or(Error::NoPages)?;

        self.output.push_str(PREAMBLE);
        for _ in 1..doc.page_count() {
            self.warn("Warning: only one page is supported");
        }

        for item in page.items() {
            self.render_item(item);
        }

        self.output.push_str(CLOSING);
        Ok(self.output)
    }

    fn render_item(&mut self, item: &Item) {
        match item {
            Item::Stroke(stroke) => self.render_stroke(stroke),
            Item::TexImage(tex) => self.render_teximage(tex),
            Item::Text(label) => self.render_text(label),
            Item::Image { .. } => {
                self.warn("Warning: raster images are unsupported");
            }
            Item::Unsupported { tag, attributes } => {
                self.warn(&format!(
                    "Warning: unsupported item <{}> {}",
                    tag,
                    format_attributes(attributes)
                ));
            }
            Item::Malformed { tag, reason } => {
                self.warn(&format!("Warning: skipping malformed <{}>: {}", tag, reason));
            }
        }
    }

    fn render_stroke(&mut self, stroke: &Stroke) {
        if stroke.tool != "pen" && stroke.tool != "highlighter" {
            self.warn("Warning: only pen and highlighter tools are supported");
        }
        let points = match stroke.points {
            Some(ref points) => points,
            None => {
                self.warn("Warning: skipping empty stroke");
                return;
            }
        };

        let color_name = self.resolve_color(stroke.color.as_deref());

        let mut options = vec![
            format!("line width={}mm", stroke.width / WIDTH_SCALE),
            color_name.clone(),
        ];
        if stroke.tool == "highlighter" {
            options.push(format!("draw opacity={}", HALF_OPACITY));
        }
        if let Some(ref style) = stroke.style {
            match style.as_str() {
                "dash" => options.push("dashed".to_string()),
                "dashdot" => options.push("dash dot".to_string()),
                "dot" => options.push("dotted".to_string()),
                other => {
                    self.warn(&format!("Warning: unsupported line style '{}'", other));
                }
            }
        }
        if stroke.fill.is_some() {
            options.push(format!("fill={}", color_name));
            options.push(format!("fill opacity={}", HALF_OPACITY));
        }

        let path = points
            .iter()
            .map(|point| position(*point))
            .collect::<Vec<_>>()
            .join(" -- ");

        self.output
            .push_str(&format!("\\draw [{}] {};\n", options.join(", "), path));
    }

    fn render_teximage(&mut self, tex: &TexImage) {
        let height = tex.bottom - tex.top;
        let size = font_size_cmd(height / 2.0);
        let pos = position(Point::new(tex.left, tex.top));
        let color_name = self.resolve_color(tex.color.as_deref());

        self.output.push_str(&format!(
            "\\node[{}, anchor=west] at {} {{{}$\\displaystyle {}$}};\n",
            color_name, pos, size, tex.text
        ));
    }

    fn render_text(&mut self, label: &TextLabel) {
        // No font substitution; the output uses the default LaTeX font
        if label.font != "Sans" {
            self.warn("Warning: changing the text font is unsupported");
        }
        let text = match label.text {
            Some(ref text) => text,
            None => {
                self.warn("Warning: skipping empty text node");
                return;
            }
        };

        let size = font_size_cmd(label.size);
        let pos = position(Point::new(label.x, label.y));
        let color_name = self.resolve_color(label.color.as_deref());

        self.output.push_str(&format!(
            "\\node[{}, anchor=west] at {} {{{}{}}};\n",
            color_name, pos, size, text
        ));
    }

    /// Resolve an item's color against the registry.
    ///
    /// A declared color gets the next `colorN` name and a `\definecolor`
    /// line emitted immediately, before first use; items without one use
    /// the built-in `black` and nothing is emitted. The hex value is the
    /// six characters after the leading marker byte of the attribute.
    fn resolve_color(&mut self, color: Option<&str>) -> String {
        let value = match color {
            Some(value) => value,
            None => return "black".to_string(),
        };

        match value.get(1..7) {
            Some(hex) if hex.chars().all(|c| c.is_ascii_hexdigit()) => {
                self.color_counter += 1;
                let name = format!("color{}", self.color_counter);
                self.output
                    .push_str(&format!("\\definecolor{{{}}}{{HTML}}{{{}}}\n", name, hex));
                name
            }
            _ => {
                self.warn(&format!("Warning: unusable color value '{}'", value));
                "black".to_string()
            }
        }
    }

    /// Emit a warning as a TikZ comment line and mirror it to the log.
    fn warn(&mut self, message: &str) {
        log::warn!("{}", message);
        self.output.push_str("% ");
        self.output.push_str(message);
        self.output.push('\n');
    }
}

impl Default for TikzRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale a source point into TikZ coordinates.
///
/// Both axes shrink by the coordinate scale and the y axis flips sign:
/// the source grows downward, TikZ grows upward.
fn scaled(point: Point) -> (f64, f64) {
    let y = -(point.y / COORDINATE_SCALE);
    // Avoid printing "-0" for points on the x axis
    let y = if y == 0.0 { 0.0 } else { y };
    (point.x / COORDINATE_SCALE, y)
}

/// Format a source point as a TikZ coordinate.
fn position(point: Point) -> String {
    let (x, y) = scaled(point);
    format!("({}, {})", x, y)
}

/// Build a `\fontsize` command for the given point size, with the
/// baseline skip at 1.2 times the size.
fn font_size_cmd(size: f64) -> String {
    format!(
        "\\fontsize{{{}}}{{{}}}\\selectfont{{}}",
        size,
        BASELINE_FACTOR * size
    )
}

fn format_attributes(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_flips_y() {
        let (x, y) = scaled(Point::new(60.0, 90.0));
        assert_eq!(x, 2.0);
        assert_eq!(y, -3.0);
    }

    #[test]
    fn test_scaled_zero_y_stays_positive() {
        let (_, y) = scaled(Point::new(0.0, 0.0));
        assert!(y.is_sign_positive());
    }

    #[test]
    fn test_position_format() {
        assert_eq!(position(Point::new(30.0, 60.0)), "(1, -2)");
    }

    #[test]
    fn test_font_size_cmd() {
        assert_eq!(font_size_cmd(20.0), "\\fontsize{20}{24}\\selectfont{}");
        assert_eq!(font_size_cmd(10.0), "\\fontsize{10}{12}\\selectfont{}");
    }

    #[test]
    fn test_font_size_cmd_inexact_product() {
        // 1.2 * 12 is not exact in f64; the shortest round-trip form is
        // emitted, same as the float formatting of the size itself
        assert_eq!(
            font_size_cmd(12.0),
            "\\fontsize{12}{14.399999999999999}\\selectfont{}"
        );
    }

    #[test]
    fn test_resolve_color_registry() {
        let mut renderer = TikzRenderer::new();

        assert_eq!(renderer.resolve_color(None), "black");
        assert!(renderer.output.is_empty());

        assert_eq!(renderer.resolve_color(Some("#3333ccff")), "color1");
        assert_eq!(renderer.resolve_color(Some("#ff0000ff")), "color2");
        assert!(renderer
            .output
            .contains("\\definecolor{color1}{HTML}{3333cc}"));
        assert!(renderer
            .output
            .contains("\\definecolor{color2}{HTML}{ff0000}"));
    }

    #[test]
    fn test_resolve_color_short_value_falls_back() {
        let mut renderer = TikzRenderer::new();
        assert_eq!(renderer.resolve_color(Some("#ff")), "black");
        assert!(renderer.output.starts_with("% Warning"));
    }

    #[test]
    fn test_format_attributes() {
        let attrs = vec![
            ("filename".to_string(), "rec.mp3".to_string()),
            ("ts".to_string(), "0".to_string()),
        ];
        assert_eq!(format_attributes(&attrs), "filename=\"rec.mp3\" ts=\"0\"");
    }
}
