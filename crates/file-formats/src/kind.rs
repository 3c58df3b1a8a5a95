//! File kind classification from filenames

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Extension tables per kind. Matching is by case-insensitive suffix, so a
/// name like "archive.tar.MP3" still classifies as audio.
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".ogg", ".mov", ".avi", ".mkv", ".m4v"];
const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".tiff", ".svg",
];
const TEXT_EXTENSIONS: &[&str] = &[".txt", ".rtf"];
const MARKDOWN_EXTENSIONS: &[&str] = &[".md"];
const PDF_EXTENSIONS: &[&str] = &[".pdf"];
const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".m4a", ".wav", ".ogg", ".aac", ".flac"];
const RTF_EXTENSIONS: &[&str] = &[".rtf"];

/// Displayable file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Text,
    Rtf,
    Markdown,
    Pdf,
    Image,
    Video,
    Audio,
    Unknown,
}

fn matches_any(lower_name: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| lower_name.ends_with(ext))
}

impl FileKind {
    /// Classifies a filename by extension.
    ///
    /// Total function: every name yields a kind, `Unknown` when nothing
    /// matches. Kinds are checked in a fixed order so overlapping suffixes
    /// resolve deterministically: `.rtf` wins over the plain-text table and
    /// `.ogg` classifies as video, not audio.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();

        if matches_any(&lower, MARKDOWN_EXTENSIONS) {
            Self::Markdown
        } else if matches_any(&lower, RTF_EXTENSIONS) {
            Self::Rtf
        } else if matches_any(&lower, TEXT_EXTENSIONS) {
            Self::Text
        } else if matches_any(&lower, VIDEO_EXTENSIONS) {
            Self::Video
        } else if matches_any(&lower, IMAGE_EXTENSIONS) {
            Self::Image
        } else if matches_any(&lower, PDF_EXTENSIONS) {
            Self::Pdf
        } else if matches_any(&lower, AUDIO_EXTENSIONS) {
            Self::Audio
        } else {
            Self::Unknown
        }
    }

    /// Classifies from a filesystem path (by its file name)
    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(Self::from_name)
            .unwrap_or(Self::Unknown)
    }

    /// Returns all displayable kinds
    pub fn all() -> Vec<Self> {
        vec![
            Self::Text,
            Self::Rtf,
            Self::Markdown,
            Self::Pdf,
            Self::Image,
            Self::Video,
            Self::Audio,
        ]
    }

    /// Returns the kind name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Rtf => "rtf",
            Self::Markdown => "markdown",
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true if the kind can appear in a gallery
    pub fn is_displayable(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns true if content of this kind is plain or markup text
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text | Self::Rtf | Self::Markdown)
    }

    /// Returns true if content of this kind can feed the speech pipeline
    pub fn supports_speech(&self) -> bool {
        self.is_textual()
    }

    /// Returns true if content of this kind is timed media
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Video | Self::Audio)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
