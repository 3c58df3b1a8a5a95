//! Gallery construction and navigation for Folio
//!
//! Turns a flat file listing into a stable, ordered, navigable sequence:
//! classification filters out unknown kinds, entries group by source
//! folder, natural sort orders groups and members, and divider markers
//! separate groups. A side table maps image paths (in the variants
//! markdown uses) to their content handles.

mod builder;
mod error;
mod gallery;
mod image_map;
mod scanner;
mod sort;

pub use builder::{build, ContentItem, GalleryBuild, GalleryItem, MAX_GROUP_DEPTH, ROOT_GROUP_LABEL};
pub use error::{GalleryError, Result};
pub use gallery::Gallery;
pub use image_map::ImagePathMap;
pub use scanner::{entries_from_files, FolderScanner, ScanConfig};
pub use sort::natural_cmp;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_accessible() {
        let _ = ScanConfig::default();
        let _ = ImagePathMap::new();
        assert!(matches!(build(vec![]), Err(GalleryError::NoValidFiles)));
    }
}
