//! Viewer display preferences

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

const MIN_FONT_SIZE: u32 = 10;
const MAX_FONT_SIZE: u32 = 40;

/// Display settings for the viewer surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Text display size in points
    pub font_size: u32,

    /// Dark color scheme
    pub dark_mode: bool,

    /// Maximum directory depth when scanning a selected folder
    pub max_scan_depth: usize,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            errors.push(ValidationError::with_value(
                "viewer.font_size",
                format!("must be between {} and {}", MIN_FONT_SIZE, MAX_FONT_SIZE),
                self.font_size,
            ));
        }

        if self.max_scan_depth == 0 {
            errors.push(ValidationError::new(
                "viewer.max_scan_depth",
                "must be at least 1",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            font_size: 16,
            dark_mode: false,
            max_scan_depth: 10,
        }
    }
}
