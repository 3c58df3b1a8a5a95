//! Folio configuration system
//!
//! Typed TOML configuration with per-section validation and atomic
//! persistence:
//!
//! - **Graceful degradation**: a missing file means defaults; invalid
//!   values load with warnings so nothing is lost
//! - **Atomic writes**: config files are never left in a corrupted state
//! - **Zero panics**: all errors are handled via Result types

mod error;
mod manager;
mod persistence;
mod speech_config;
mod viewer_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use persistence::ConfigPersistence;
pub use speech_config::SpeechConfig;
pub use viewer_config::ViewerConfig;

use serde::{Deserialize, Serialize};

/// Current config file format version for migrations
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Viewer display settings
    pub viewer: ViewerConfig,

    /// Spoken-reading preferences
    pub speech: SpeechConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration, collecting all errors across
    /// all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.viewer.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.speech.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            viewer: ViewerConfig::default(),
            speech: SpeechConfig::default(),
        }
    }
}
