//! Gallery construction from a flat file listing
//!
//! Entries are classified, partitioned into a root group and subfolder
//! groups by path depth, naturally sorted, and emitted as one ordered
//! item sequence with divider markers between groups. The build is
//! deterministic: the same input always produces the same sequence.

use crate::error::{GalleryError, Result};
use crate::image_map::ImagePathMap;
use crate::sort::natural_cmp;
use folio_core::{ContentRef, FileEntry};
use folio_file_formats::{display_name, FileKind};
use log::{debug, warn};
use std::collections::HashMap;

/// Subfolder groups may nest this many levels below the root group;
/// deeper entries are dropped from the gallery.
pub const MAX_GROUP_DEPTH: usize = 2;

/// Divider label for files at the load root
pub const ROOT_GROUP_LABEL: &str = "./";

/// One entry in the ordered gallery sequence
#[derive(Debug, Clone)]
pub enum GalleryItem {
    /// Marks the start of a source-folder group; not selectable content
    Divider { label: String },
    /// A displayable file
    Content(ContentItem),
}

impl GalleryItem {
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider { .. })
    }

    /// The item's key: group label for dividers, unique key for content
    pub fn key(&self) -> &str {
        match self {
            Self::Divider { label } => label,
            Self::Content(item) => item.key(),
        }
    }
}

/// A displayable gallery entry. Immutable; replacing content happens by
/// swapping the whole record through [`crate::Gallery::replace_content`].
#[derive(Debug, Clone)]
pub struct ContentItem {
    key: String,
    kind: FileKind,
    content: ContentRef,
    original_name: String,
    display_name: String,
}

impl ContentItem {
    /// Unique key within one build (counter prefix + display name)
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn content(&self) -> &ContentRef {
        &self.content
    }

    /// Original file name, extension included
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// File name with the extension stripped
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub(crate) fn with_content(&self, content: ContentRef) -> Self {
        Self {
            key: self.key.clone(),
            kind: self.kind,
            content,
            original_name: self.original_name.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Result of a gallery build
#[derive(Debug)]
pub struct GalleryBuild {
    pub items: Vec<GalleryItem>,
    pub image_map: ImagePathMap,
}

/// Builds the ordered gallery from a flat entry list.
///
/// Fails only with [`GalleryError::NoValidFiles`] when nothing
/// displayable remains after classification.
pub fn build(entries: Vec<FileEntry>) -> Result<GalleryBuild> {
    let valid: Vec<(FileEntry, FileKind)> = entries
        .into_iter()
        .map(|entry| {
            let kind = FileKind::from_name(entry.name());
            (entry, kind)
        })
        .filter(|(_, kind)| kind.is_displayable())
        .collect();

    if valid.is_empty() {
        return Err(GalleryError::NoValidFiles);
    }

    let mut image_map = ImagePathMap::new();
    let mut root_files: Vec<(FileEntry, FileKind)> = Vec::new();
    let mut by_folder: HashMap<String, Vec<(FileEntry, FileKind)>> = HashMap::new();

    for (entry, kind) in valid {
        let parts = entry.path_parts();

        // Markdown may reference any image by its path below the load root
        if kind == FileKind::Image {
            let from_root = if parts.len() > 1 {
                parts[1..].join("/")
            } else {
                entry.name().to_string()
            };
            image_map.register(&from_root, entry.content().clone());
        }

        if parts.len() <= 2 {
            // Directly selected file, or file at the root of the folder
            root_files.push((entry, kind));
        } else {
            let depth = parts.len() - 2;
            if depth <= MAX_GROUP_DEPTH {
                let folder = parts[1..parts.len() - 1].join("/");
                by_folder.entry(folder).or_default().push((entry, kind));
            } else {
                warn!(
                    "skipping {} (nested {} levels deep, max {})",
                    entry.relative_path(),
                    depth,
                    MAX_GROUP_DEPTH
                );
            }
        }
    }

    let mut folder_names: Vec<String> = by_folder.keys().cloned().collect();
    folder_names.sort_by(|a, b| natural_cmp(a, b));

    let mut items = Vec::new();
    let mut item_index = 0usize;

    if !root_files.is_empty() {
        // The root divider only matters when other groups follow it
        if !folder_names.is_empty() {
            items.push(GalleryItem::Divider {
                label: ROOT_GROUP_LABEL.to_string(),
            });
        }

        root_files.sort_by(|a, b| natural_cmp(a.0.name(), b.0.name()));
        for (entry, kind) in root_files {
            item_index += 1;
            items.push(make_content_item(item_index, entry, kind));
        }
    }

    for folder in folder_names {
        let mut files = by_folder.remove(&folder).unwrap_or_default();
        files.sort_by(|a, b| natural_cmp(a.0.name(), b.0.name()));

        items.push(GalleryItem::Divider { label: folder });
        for (entry, kind) in files {
            item_index += 1;
            items.push(make_content_item(item_index, entry, kind));
        }
    }

    debug!(
        "built gallery: {} items, {} image keys",
        items.len(),
        image_map.len()
    );

    Ok(GalleryBuild { items, image_map })
}

fn make_content_item(index: usize, entry: FileEntry, kind: FileKind) -> GalleryItem {
    let display = display_name(entry.name()).to_string();
    GalleryItem::Content(ContentItem {
        key: format!("{}_{}", index, display),
        kind,
        content: entry.content().clone(),
        original_name: entry.name().to_string(),
        display_name: display,
    })
}
