//! Page-level types.

use super::Item;
use serde::Serialize;

/// A single page of the note document.
///
/// A page is an ordered sequence of layers. Layer identity is not
/// preserved in output; [`Page::items`] flattens them in layer order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    /// Layers in stacking order (bottom first).
    pub layers: Vec<Layer>,
}

impl Page {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add a layer to the page.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Iterate all items across all layers, in layer order then item order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.layers.iter().flat_map(|layer| layer.items.iter())
    }

    /// Total number of items on the page.
    pub fn item_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.items.len()).sum()
    }

    /// Check if the page has no items.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// An ordered group of items within a page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Layer {
    /// Items in document order.
    pub items: Vec<Item>,
}

impl Layer {
    /// Create a new empty layer.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an item to the layer.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    #[test]
    fn test_items_flatten_across_layers() {
        let mut page = Page::new();

        let mut bottom = Layer::new();
        bottom.add_item(Item::Image {
            attributes: vec![("filename".to_string(), "a.png".to_string())],
        });
        let mut top = Layer::new();
        top.add_item(Item::Image { attributes: vec![] });
        top.add_item(Item::Image { attributes: vec![] });

        page.add_layer(bottom);
        page.add_layer(top);

        assert_eq!(page.item_count(), 3);
        assert_eq!(page.items().count(), 3);
        assert!(!page.is_empty());
    }
}
