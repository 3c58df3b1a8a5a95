//! Platform config path resolution

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolves the platform config location and owns the persistence handler
pub struct ConfigManager {
    persistence: ConfigPersistence,
}

impl ConfigManager {
    /// Creates a manager rooted at the platform config directory
    /// (e.g. `~/.config/folio/config.toml` on Linux)
    pub fn new() -> ConfigResult<Self> {
        let dirs =
            ProjectDirs::from("", "", "folio").ok_or_else(|| ConfigError::PathResolutionError {
                reason: "no home directory available".to_string(),
            })?;
        let config_path = dirs.config_dir().join(CONFIG_FILE_NAME);
        Ok(Self::with_path(config_path))
    }

    /// Creates a manager for an explicit config file path
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            persistence: ConfigPersistence::new(config_path),
        }
    }

    pub fn config_path(&self) -> &Path {
        self.persistence.config_path()
    }

    /// Loads the config, or defaults when no file exists yet
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }

    /// Persists the config atomically
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        self.persistence.save(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_path_uses_given_location() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        let manager = ConfigManager::with_path(path.clone());
        assert_eq!(manager.config_path(), path);
    }

    #[test]
    fn test_load_save_through_manager() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.toml"));

        let mut config = manager.load().expect("defaults");
        config.viewer.font_size = 22;
        manager.save(&config).expect("save");

        let loaded = manager.load().expect("reload");
        assert_eq!(loaded.viewer.font_size, 22);
    }
}
