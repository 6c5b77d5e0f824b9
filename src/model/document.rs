//! Document-level types.

use super::Page;
use serde::Serialize;

/// A parsed Xournal++ document.
///
/// Holds zero or more pages. Rendering processes only the first page;
/// keeping the rest in the model lets the renderer warn about them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    /// Pages in document order.
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the first page, if any.
    pub fn first_page(&self) -> Option<&Page> {
        self.pages.first()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of items across all pages and layers.
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|page| page.item_count()).sum()
    }
}
