//! JSON rendering of the parsed document model.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Pretty-printed with indentation.
    Pretty,
    /// Compact single-line output.
    Compact,
}

/// Serialize a document model to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };
    result.map_err(|e| Error::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Item, Layer, Page};

    #[test]
    fn test_to_json() {
        let mut doc = Document::new();
        let mut layer = Layer::new();
        layer.add_item(Item::Image { attributes: vec![] });
        let mut page = Page::new();
        page.add_layer(layer);
        doc.add_page(page);

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"type\":\"image\""));

        let pretty = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(pretty.contains('\n'));
    }
}
