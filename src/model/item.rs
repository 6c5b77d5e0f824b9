//! Drawable item types.

use serde::Serialize;

/// A point in source (Xournal++) coordinates. The y axis grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A drawable item within a layer.
///
/// Attribute carriers use `Vec<(String, String)>` in encounter order so
/// that warning output stays deterministic across runs.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    /// A freehand drawn path.
    Stroke(Stroke),

    /// An embedded block of raw LaTeX math rendered as a label.
    TexImage(TexImage),

    /// A plain text label.
    Text(TextLabel),

    /// A raster image. Embedding raster data is out of scope; the
    /// renderer warns and emits nothing.
    Image {
        /// Raw attributes, kept for the warning message.
        attributes: Vec<(String, String)>,
    },

    /// Any other item tag. The renderer warns, naming the tag and its
    /// attributes, and emits nothing.
    Unsupported {
        /// Element tag name.
        tag: String,
        /// Raw attributes in encounter order.
        attributes: Vec<(String, String)>,
    },

    /// An item that could not be interpreted (missing required attribute
    /// or unparsable number). The renderer warns and skips it.
    Malformed {
        /// Element tag name.
        tag: String,
        /// Human-readable reason.
        reason: String,
    },
}

/// A freehand stroke: an ordered list of points plus pen styling.
#[derive(Debug, Clone, Serialize)]
pub struct Stroke {
    /// Drawing tool, e.g. "pen" or "highlighter". Other values render
    /// with a warning.
    pub tool: String,

    /// Raw `color` attribute value (e.g. "#3333ccff"), if declared.
    pub color: Option<String>,

    /// Declared stroke width in source units.
    pub width: f64,

    /// Raw `style` attribute value ("dash", "dashdot", "dot"), if any.
    pub style: Option<String>,

    /// Raw `fill` attribute value, if any. Presence alone enables filling.
    pub fill: Option<String>,

    /// Coordinate pairs parsed from the element's inline text, or `None`
    /// when the element had no inline text at all.
    pub points: Option<Vec<Point>>,
}

/// An embedded formula block. Its `text` attribute holds raw LaTeX math.
#[derive(Debug, Clone, Serialize)]
pub struct TexImage {
    /// Left edge in source coordinates.
    pub left: f64,

    /// Top edge in source coordinates.
    pub top: f64,

    /// Bottom edge in source coordinates.
    pub bottom: f64,

    /// Raw formula markup, not escaped or validated.
    pub text: String,

    /// Raw `color` attribute value, if declared.
    pub color: Option<String>,
}

/// A plain text label.
#[derive(Debug, Clone, Serialize)]
pub struct TextLabel {
    /// Declared font name. Only "Sans" renders without a warning; the
    /// output always uses the default LaTeX font either way.
    pub font: String,

    /// Font size in points.
    pub size: f64,

    /// Horizontal position in source coordinates.
    pub x: f64,

    /// Vertical position in source coordinates.
    pub y: f64,

    /// Raw `color` attribute value, if declared.
    pub color: Option<String>,

    /// Inline text content, or `None` when the element was empty.
    pub text: Option<String>,
}

impl Item {
    /// The source tag name this item was parsed from.
    pub fn tag(&self) -> &str {
        match self {
            Item::Stroke(_) => "stroke",
            Item::TexImage(_) => "teximage",
            Item::Text(_) => "text",
            Item::Image { .. } => "image",
            Item::Unsupported { tag, .. } => tag,
            Item::Malformed { tag, .. } => tag,
        }
    }
}
