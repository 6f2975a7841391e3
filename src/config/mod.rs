//! Configuration loading and management for the shift comparator.
//!
//! This module loads the application configuration from a YAML file:
//! request defaults and HTTP listener settings. The pay policy itself is
//! fixed and not part of the configuration.
//!
//! # Example
//!
//! ```no_run
//! use shift_comparator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/comparator.yaml").unwrap();
//! println!("Listening on {}", config.config().server.bind_address());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{AppConfig, ServerConfig};
