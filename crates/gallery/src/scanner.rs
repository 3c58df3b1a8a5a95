// FILE: crates/gallery/src/scanner.rs

use crate::error::{GalleryError, Result};
use folio_core::error::AppError;
use folio_core::{ContentRef, FileEntry};
use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DEFAULT_MAX_DEPTH: usize = 10;

/// Configuration for folder scanning
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum directory depth below the selected folder
    pub max_depth: usize,
    /// Follow symbolic links
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH, // Reasonable default to prevent runaway recursion
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Walks a selected folder into flat [`FileEntry`] values.
///
/// Relative paths start with the selected folder's own name, matching the
/// shape a browser folder selection reports, so the gallery builder sees
/// `trip/day1/a.jpg` for a file inside a selected `trip` directory.
pub struct FolderScanner {
    config: ScanConfig,
}

impl FolderScanner {
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scans a folder (or accepts a single file) into entries
    pub fn scan(&self, root: &Path) -> Result<Vec<FileEntry>> {
        if !root.exists() {
            return Err(GalleryError::Core(AppError::FileNotFound {
                path: root.to_path_buf(),
            }));
        }

        if root.is_file() {
            let name = file_name_str(root)?;
            return Ok(vec![FileEntry::new(
                name,
                ContentRef::from_path(root.to_path_buf()),
            )]);
        }

        let root_name = file_name_str(root)?;
        let mut entries = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth);

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("error walking directory: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let below_root = match entry.path().strip_prefix(root) {
                Ok(p) => p,
                Err(_) => continue,
            };
            let relative = match path_to_slash_string(below_root) {
                Some(r) => r,
                None => {
                    warn!("skipping non-UTF-8 path: {}", entry.path().display());
                    continue;
                }
            };

            entries.push(FileEntry::new(
                format!("{}/{}", root_name, relative),
                ContentRef::from_path(entry.path().to_path_buf()),
            ));
        }

        info!(
            "scanned {}: {} files",
            root.display(),
            entries.len()
        );
        Ok(entries)
    }
}

impl Default for FolderScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds entries from a flat multi-file selection (no folder context)
pub fn entries_from_files(paths: &[PathBuf]) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    for path in paths {
        if !path.is_file() {
            warn!("skipping non-file selection: {}", path.display());
            continue;
        }
        let name = file_name_str(path)?;
        entries.push(FileEntry::new(name, ContentRef::from_path(path.clone())));
    }
    Ok(entries)
}

fn file_name_str(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| GalleryError::InvalidPath(path.display().to_string()))
}

fn path_to_slash_string(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        parts.push(component.as_os_str().to_str()?);
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"data").unwrap();
    }

    #[test]
    fn test_scan_missing_path_errors() {
        let scanner = FolderScanner::new();
        assert!(scanner.scan(Path::new("/nonexistent/nowhere")).is_err());
    }

    #[test]
    fn test_scan_prefixes_root_folder_name() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("trip");
        fs::create_dir(&root).unwrap();
        touch(&root, "a.txt");
        touch(&root, "day1/b.jpg");

        let scanner = FolderScanner::new();
        let mut paths: Vec<String> = scanner
            .scan(&root)
            .unwrap()
            .iter()
            .map(|e| e.relative_path().to_string())
            .collect();
        paths.sort();

        assert_eq!(paths, vec!["trip/a.txt", "trip/day1/b.jpg"]);
    }

    #[test]
    fn test_scan_single_file() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "one.md");

        let scanner = FolderScanner::new();
        let entries = scanner.scan(&temp.path().join("one.md")).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path(), "one.md");
        assert!(entries[0].content().path().is_some());
    }

    #[test]
    fn test_scan_respects_max_depth() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("lib");
        fs::create_dir(&root).unwrap();
        touch(&root, "top.txt");
        touch(&root, "a/mid.txt");
        touch(&root, "a/b/deep.txt");

        let config = ScanConfig::new().with_max_depth(1);
        let scanner = FolderScanner::with_config(config);
        let entries = scanner.scan(&root).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path(), "lib/top.txt");
    }

    #[test]
    fn test_entries_from_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "x.txt");
        touch(temp.path(), "y.png");

        let entries = entries_from_files(&[
            temp.path().join("x.txt"),
            temp.path().join("y.png"),
            temp.path().join("missing.pdf"),
        ])
        .unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.relative_path()).collect();
        assert_eq!(names, vec!["x.txt", "y.png"]);
    }
}
