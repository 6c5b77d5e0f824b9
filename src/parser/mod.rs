//! Xournal++ document parsing module.

mod xml;
mod xopp;

pub use xml::Element;
pub use xopp::XoppParser;
