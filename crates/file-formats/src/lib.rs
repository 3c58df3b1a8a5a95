mod kind;
mod mime;
mod naming;

// Re-export all types
pub use kind::FileKind;
pub use mime::MimeType;
pub use naming::{display_name, file_extension};

pub mod prelude {
    pub use crate::{display_name, file_extension, FileKind, MimeType};
}
