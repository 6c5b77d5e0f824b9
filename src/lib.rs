//! # unxopp
//!
//! Convert Xournal++ note documents (`.xopp`) to standalone TikZ documents.
//!
//! A `.xopp` file is gzip-compressed XML describing pages of hand-drawn
//! content. This library decompresses and parses one document, then renders
//! the first page as LaTeX/TikZ drawing commands, so hand-drawn diagrams
//! can be embedded in typeset documents as editable vector graphics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unxopp::{parse_file, render};
//!
//! fn main() -> unxopp::Result<()> {
//!     // Parse a .xopp file
//!     let doc = parse_file("notes.xopp")?;
//!
//!     // Convert the first page to a TikZ document
//!     let tikz = render::to_tikz(&doc)?;
//!     println!("{}", tikz);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Supported content
//!
//! - **Strokes**: pen and highlighter freehand paths, with dash styles and
//!   fills
//! - **Formulas**: embedded `teximage` blocks rendered as math-mode labels
//! - **Text labels**: plain text nodes
//!
//! Raster images and pages beyond the first are reported as warning
//! comments and skipped.

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_xopp, XoppFormat};
pub use error::{Error, Result};
pub use model::{Document, Item, Layer, Page, Point, Stroke, TexImage, TextLabel};
pub use parser::XoppParser;
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Parse a .xopp file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use unxopp::parse_file;
///
/// let doc = parse_file("notes.xopp").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = XoppParser::open(path)?;
    parser.parse()
}

/// Parse a .xopp document from its compressed bytes.
///
/// # Example
///
/// ```no_run
/// use unxopp::parse_bytes;
///
/// let data = std::fs::read("notes.xopp").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = XoppParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a .xopp document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = XoppParser::from_reader(reader)?;
    parser.parse()
}

/// Convert a .xopp file to a standalone TikZ document.
///
/// # Example
///
/// ```no_run
/// use unxopp::to_tikz;
///
/// let tikz = to_tikz("notes.xopp").unwrap();
/// std::fs::write("notes.tex", tikz).unwrap();
/// ```
pub fn to_tikz<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_tikz(&doc)
}

/// Convert a .xopp file to a JSON dump of its parsed model.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}
