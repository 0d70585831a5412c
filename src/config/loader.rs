use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Config;

/// Config filenames probed in the working directory, in priority order.
const LOCAL_CONFIG_NAMES: [&str; 2] = [".style-guard.toml", "style-guard.toml"];

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file is present.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from TOML files in the working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn discover() -> Option<PathBuf> {
        LOCAL_CONFIG_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        match Self::discover() {
            Some(path) => self.load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
