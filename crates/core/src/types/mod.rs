//! Domain types for Folio
//!
//! This module contains the shared domain models:
//! - `entry`: immutable file-entry records and content handles
//! - `speech`: speech rate, language tags, repeat modes
//! - `common`: shared traits and utilities

mod common;
mod entry;
mod speech;

// Re-export all public types
pub use common::Validator;
pub use entry::{ContentRef, FileEntry};
pub use speech::{LanguageTag, RepeatMode, SpeechRate};
