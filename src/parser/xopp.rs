//! Xournal++ document parser.
//!
//! Decompresses the gzip input, tokenizes the XML, and converts the
//! element tree into the typed [`Document`] model. Items that cannot be
//! interpreted (missing required attributes, unparsable numbers) are kept
//! as [`Item::Malformed`] so the renderer can warn and continue instead
//! of failing the whole conversion.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, Item, Layer, Page, Point, Stroke, TexImage, TextLabel};

use super::xml::{parse_tree, Element};

/// Xournal++ document parser.
pub struct XoppParser {
    xml: String,
}

impl XoppParser {
    /// Open a .xopp file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify the gzip header before decompressing
        detect_format_from_path(path)?;

        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a .xopp document from its compressed bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let mut decoder = GzDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        let xml = String::from_utf8(decompressed)?;

        log::debug!("decompressed {} bytes of XML", xml.len());
        Ok(Self { xml })
    }

    /// Parse a .xopp document from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse the document and return the structured model.
    pub fn parse(&self) -> Result<Document> {
        let root = parse_tree(&self.xml)?;

        let mut document = Document::new();
        for child in &root.children {
            if child.tag == "page" {
                document.add_page(parse_page(child));
            } else {
                log::debug!("skipping top-level <{}> element", child.tag);
            }
        }

        Ok(document)
    }
}

fn parse_page(element: &Element) -> Page {
    let mut page = Page::new();
    for child in &element.children {
        // Backgrounds and other non-layer children carry nothing drawable
        if child.tag != "layer" {
            log::debug!("skipping <{}> inside page", child.tag);
            continue;
        }
        let mut layer = Layer::new();
        for item in &child.children {
            layer.add_item(parse_item(item));
        }
        page.add_layer(layer);
    }
    page
}

fn parse_item(element: &Element) -> Item {
    let result = match element.tag.as_str() {
        "stroke" => parse_stroke(element).map(Item::Stroke),
        "teximage" => parse_teximage(element).map(Item::TexImage),
        "text" => parse_text(element).map(Item::Text),
        "image" => Ok(Item::Image {
            attributes: element.attributes.clone(),
        }),
        _ => Ok(Item::Unsupported {
            tag: element.tag.clone(),
            attributes: element.attributes.clone(),
        }),
    };

    result.unwrap_or_else(|err| Item::Malformed {
        tag: element.tag.clone(),
        reason: err.to_string(),
    })
}

fn parse_stroke(element: &Element) -> Result<Stroke> {
    let tool = required(element, "tool")?.to_string();
    let width = required_f64(element, "width")?;
    let points = match element.text {
        Some(ref text) => Some(parse_points(&element.tag, text)?),
        None => None,
    };

    Ok(Stroke {
        tool,
        color: element.attribute("color").map(str::to_string),
        width,
        style: element.attribute("style").map(str::to_string),
        fill: element.attribute("fill").map(str::to_string),
        points,
    })
}

fn parse_teximage(element: &Element) -> Result<TexImage> {
    Ok(TexImage {
        left: required_f64(element, "left")?,
        top: required_f64(element, "top")?,
        bottom: required_f64(element, "bottom")?,
        text: required(element, "text")?.to_string(),
        color: element.attribute("color").map(str::to_string),
    })
}

fn parse_text(element: &Element) -> Result<TextLabel> {
    Ok(TextLabel {
        font: required(element, "font")?.to_string(),
        size: required_f64(element, "size")?,
        x: required_f64(element, "x")?,
        y: required_f64(element, "y")?,
        color: element.attribute("color").map(str::to_string),
        text: element.text.clone(),
    })
}

/// Parse whitespace-separated coordinate tokens two at a time into
/// points. An unpaired trailing token is silently dropped.
fn parse_points(tag: &str, text: &str) -> Result<Vec<Point>> {
    let mut values = Vec::new();
    for token in text.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| Error::InvalidNumber {
            tag: tag.to_string(),
            attribute: "coordinates".to_string(),
            value: token.to_string(),
        })?;
        values.push(value);
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

fn required<'a>(element: &'a Element, key: &str) -> Result<&'a str> {
    element
        .attribute(key)
        .ok_or_else(|| Error::MissingAttribute {
            tag: element.tag.clone(),
            attribute: key.to_string(),
        })
}

fn required_f64(element: &Element, key: &str) -> Result<f64> {
    let value = required(element, key)?;
    value.parse().map_err(|_| Error::InvalidNumber {
        tag: element.tag.clone(),
        attribute: key.to_string(),
        value: value.to_string(),
    })
}
