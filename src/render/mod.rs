//! Rendering module for converting parsed documents to output formats.

mod json;
mod tikz;

pub use json::{to_json, JsonFormat};
pub use tikz::{to_tikz, TikzRenderer};
