//! MIME type information for viewer content

use crate::{file_extension, FileKind};

/// MIME type resolved for a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    primary: &'static str,
}

impl MimeType {
    /// Returns the generic MIME type for a file kind
    pub fn from_kind(kind: FileKind) -> Self {
        let primary = match kind {
            FileKind::Text => "text/plain",
            FileKind::Rtf => "application/rtf",
            FileKind::Markdown => "text/markdown",
            FileKind::Pdf => "application/pdf",
            FileKind::Image => "image/*",
            FileKind::Video => "video/*",
            FileKind::Audio => "audio/*",
            FileKind::Unknown => "application/octet-stream",
        };
        Self { primary }
    }

    /// Resolves a concrete MIME type from a filename, falling back to the
    /// kind-level type when the extension has no specific mapping
    pub fn from_name(name: &str) -> Self {
        let ext = file_extension(name);
        let specific = match ext.as_deref() {
            Some(".txt") => Some("text/plain"),
            Some(".rtf") => Some("application/rtf"),
            Some(".md") => Some("text/markdown"),
            Some(".pdf") => Some("application/pdf"),
            Some(".jpg") | Some(".jpeg") => Some("image/jpeg"),
            Some(".png") => Some("image/png"),
            Some(".gif") => Some("image/gif"),
            Some(".bmp") => Some("image/bmp"),
            Some(".webp") => Some("image/webp"),
            Some(".tiff") => Some("image/tiff"),
            Some(".svg") => Some("image/svg+xml"),
            Some(".mp4") => Some("video/mp4"),
            Some(".webm") => Some("video/webm"),
            Some(".ogg") => Some("video/ogg"),
            Some(".mov") => Some("video/quicktime"),
            Some(".avi") => Some("video/x-msvideo"),
            Some(".mkv") => Some("video/x-matroska"),
            Some(".m4v") => Some("video/x-m4v"),
            Some(".mp3") => Some("audio/mpeg"),
            Some(".m4a") => Some("audio/mp4"),
            Some(".wav") => Some("audio/wav"),
            Some(".aac") => Some("audio/aac"),
            Some(".flac") => Some("audio/flac"),
            _ => None,
        };

        match specific {
            Some(primary) => Self { primary },
            None => Self::from_kind(FileKind::from_name(name)),
        }
    }

    /// Returns the primary MIME type
    pub fn primary(&self) -> &str {
        self.primary
    }
}
