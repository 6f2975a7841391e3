//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ComparatorError, ComparatorResult};

use super::types::AppConfig;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/comparator.yaml";

/// Loads and provides access to the application configuration.
///
/// # Example
///
/// ```no_run
/// use shift_comparator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/comparator.yaml").unwrap();
/// println!("Default rate: {}", loader.config().default_hourly_rate);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or:
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if it is not valid YAML for [`AppConfig`]
    pub fn load<P: AsRef<Path>>(path: P) -> ComparatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ComparatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content, &path_str)?;
        debug!(path = %path_str, "Configuration loaded");
        Ok(loader)
    }

    /// Parses configuration from YAML text; `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> ComparatorResult<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| ComparatorError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
