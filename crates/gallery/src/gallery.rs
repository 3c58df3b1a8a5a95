//! Gallery navigation
//!
//! Owns the built item sequence plus the current position. Navigation
//! wraps around at the ends and never lands on a divider; dividers are
//! group markers, not selectable content.

use crate::builder::{GalleryBuild, GalleryItem};
use crate::image_map::ImagePathMap;
use folio_core::ContentRef;

#[derive(Debug)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    image_map: ImagePathMap,
    current: usize,
}

impl Gallery {
    /// Wraps a build result, positioned on the first content item
    pub fn from_build(build: GalleryBuild) -> Self {
        let current = build
            .items
            .iter()
            .position(|item| !item.is_divider())
            .unwrap_or(0);
        Self {
            items: build.items,
            image_map: build.image_map,
            current,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn image_map(&self) -> &ImagePathMap {
        &self.image_map
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Currently selected item, if the gallery holds any content
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.current).filter(|item| !item.is_divider())
    }

    /// Number of content items (dividers excluded)
    pub fn content_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_divider()).count()
    }

    /// Selects an item by sequence index. Dividers and out-of-range
    /// indices are rejected.
    pub fn select(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) if !item.is_divider() => {
                self.current = index;
                true
            }
            _ => false,
        }
    }

    /// Advances to the next content item, wrapping past the end
    pub fn next(&mut self) -> Option<&GalleryItem> {
        self.step(1)
    }

    /// Moves to the previous content item, wrapping past the start
    pub fn prev(&mut self) -> Option<&GalleryItem> {
        self.step(self.items.len().saturating_sub(1))
    }

    fn step(&mut self, delta: usize) -> Option<&GalleryItem> {
        if self.content_count() == 0 {
            return None;
        }

        let len = self.items.len();
        let mut index = self.current;
        // Bounded by len: at least one non-divider item exists
        for _ in 0..len {
            index = (index + delta) % len;
            if !self.items[index].is_divider() {
                self.current = index;
                return self.items.get(index);
            }
        }
        None
    }

    /// Replaces the content handle of the item at `index`, producing a
    /// fresh record in that slot. Returns false for dividers and
    /// out-of-range indices.
    pub fn replace_content(&mut self, index: usize, content: ContentRef) -> bool {
        match self.items.get(index) {
            Some(GalleryItem::Content(item)) => {
                let replacement = item.with_content(content);
                self.items[index] = GalleryItem::Content(replacement);
                true
            }
            _ => false,
        }
    }

    /// Position among content items, e.g. "3/14"
    pub fn progress(&self) -> String {
        let total = self.content_count();
        if total == 0 {
            return "0/0".to_string();
        }
        let position = self
            .items
            .iter()
            .take(self.current + 1)
            .filter(|item| !item.is_divider())
            .count();
        format!("{}/{}", position, total)
    }
}
