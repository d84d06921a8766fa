//! Configuration system for pathscout.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHSCOUT_*`)
//! 3. Private project config (`pathscout.local.yaml`)
//! 4. Project config (`pathscout.yaml`)
//! 5. User config (`~/.pathscout/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathscout::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("anchor: {}", config.anchor());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathscout::config::{Config, ConfigBuilder, ScanConfig};
//!
//! let custom = Config {
//!     scan: Some(ScanConfig { max_depth: Some(8), follow_symlinks: None }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.scan_options().max_depth, 8);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{
    ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, USER_DATA_DIR,
};
pub use merger::ConfigMerger;
pub use schema::{Config, RootsConfig, ScanConfig, DEFAULT_ANCHOR};
pub use validator::ConfigValidator;
