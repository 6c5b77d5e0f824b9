//! Document model types for Xournal++ note content.

mod document;
mod item;
mod page;

pub use document::Document;
pub use item::{Item, Point, Stroke, TexImage, TextLabel};
pub use page::{Layer, Page};
