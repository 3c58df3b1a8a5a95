// FILE: crates/gallery/src/error.rs

use folio_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("No valid files found. Supported kinds: text, markdown, rtf, pdf, image, video, audio")]
    NoValidFiles,

    #[error(transparent)]
    Core(#[from] AppError),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
