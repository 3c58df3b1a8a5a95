//! Image path lookup for markdown rendering
//!
//! Markdown content can reference a local image as `photo.png`,
//! `./photo.png`, or with spaces percent-encoded. Every image entry is
//! registered under all four variants so the renderer can resolve any of
//! them to the same content handle.

use folio_core::ContentRef;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ImagePathMap {
    map: HashMap<String, ContentRef>,
}

impl ImagePathMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registers an image under its raw relative path, the `./`-prefixed
    /// form, and the `%20`-encoded forms of both.
    pub fn register(&mut self, relative_path: &str, content: ContentRef) {
        let encoded = relative_path.replace(' ', "%20");

        self.map
            .insert(relative_path.to_string(), content.clone());
        self.map
            .insert(format!("./{relative_path}"), content.clone());
        self.map.insert(encoded.clone(), content.clone());
        self.map.insert(format!("./{encoded}"), content);
    }

    /// Looks up a markdown image reference
    pub fn resolve(&self, reference: &str) -> Option<&ContentRef> {
        self.map.get(reference)
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.map.contains_key(reference)
    }

    /// Number of registered keys (variants included)
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
