//! File-entry records and content handles

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Opaque, cheaply-clonable handle to file content.
///
/// Content either lives in memory (a dropped or pre-fetched blob) or is
/// referenced by a filesystem path resolved lazily by the caller. The
/// handle itself performs no I/O; fetching bytes from a `File` variant is
/// the consumer's job.
#[derive(Debug, Clone)]
pub struct ContentRef(Arc<ContentSource>);

#[derive(Debug)]
enum ContentSource {
    Bytes(Vec<u8>),
    File(PathBuf),
}

impl ContentRef {
    /// Creates a handle over in-memory bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Arc::new(ContentSource::Bytes(bytes)))
    }

    /// Creates a handle referencing a file on disk
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self(Arc::new(ContentSource::File(path.into())))
    }

    /// Returns the in-memory bytes, if this handle holds any
    pub fn bytes(&self) -> Option<&[u8]> {
        match self.0.as_ref() {
            ContentSource::Bytes(b) => Some(b),
            ContentSource::File(_) => None,
        }
    }

    /// Returns the backing file path, if this handle references one
    pub fn path(&self) -> Option<&Path> {
        match self.0.as_ref() {
            ContentSource::Bytes(_) => None,
            ContentSource::File(p) => Some(p),
        }
    }

    /// Returns true if both handles reference the same underlying content
    pub fn same_source(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A single input file as supplied by the filesystem or a cloud listing.
///
/// `relative_path` is measured from the load root and uses `/` separators
/// regardless of platform; for a flat file selection it is just the file
/// name. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct FileEntry {
    relative_path: String,
    name: String,
    content: ContentRef,
}

impl FileEntry {
    /// Creates an entry; the file name is the path's last component
    pub fn new(relative_path: impl Into<String>, content: ContentRef) -> Self {
        let relative_path = relative_path.into();
        let name = relative_path
            .rsplit('/')
            .next()
            .unwrap_or(relative_path.as_str())
            .to_string();
        Self {
            relative_path,
            name,
            content,
        }
    }

    /// Relative path from the load root
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// File name (last path component)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle to the entry's content
    pub fn content(&self) -> &ContentRef {
        &self.content
    }

    /// Path components of the relative path
    pub fn path_parts(&self) -> Vec<&str> {
        self.relative_path.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_ref_bytes() {
        let content = ContentRef::from_bytes(b"hello".to_vec());
        assert_eq!(content.bytes(), Some(b"hello".as_ref()));
        assert!(content.path().is_none());
    }

    #[test]
    fn test_content_ref_path() {
        let content = ContentRef::from_path("/tmp/a.txt");
        assert!(content.bytes().is_none());
        assert_eq!(content.path(), Some(Path::new("/tmp/a.txt")));
    }

    #[test]
    fn test_content_ref_clone_shares_source() {
        let content = ContentRef::from_bytes(vec![1, 2, 3]);
        let clone = content.clone();
        assert!(content.same_source(&clone));

        let other = ContentRef::from_bytes(vec![1, 2, 3]);
        assert!(!content.same_source(&other));
    }

    #[test]
    fn test_entry_name_from_nested_path() {
        let entry = FileEntry::new("vacation/day1/beach.jpg", ContentRef::from_bytes(vec![]));
        assert_eq!(entry.name(), "beach.jpg");
        assert_eq!(entry.path_parts(), vec!["vacation", "day1", "beach.jpg"]);
    }

    #[test]
    fn test_entry_name_from_flat_path() {
        let entry = FileEntry::new("notes.txt", ContentRef::from_bytes(vec![]));
        assert_eq!(entry.name(), "notes.txt");
        assert_eq!(entry.relative_path(), "notes.txt");
    }
}
