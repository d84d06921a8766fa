//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PATHSCOUT_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides `project_root`.
pub const ENV_PROJECT_ROOT: &str = "PATHSCOUT_PROJECT_ROOT";
/// Overrides `roots.distributed`.
pub const ENV_DISTRIBUTED_ROOT: &str = "PATHSCOUT_DISTRIBUTED_ROOT";
/// Overrides `roots.development`.
pub const ENV_DEVELOPMENT_ROOT: &str = "PATHSCOUT_DEVELOPMENT_ROOT";
/// Overrides `anchor`.
pub const ENV_ANCHOR: &str = "PATHSCOUT_ANCHOR";
/// Overrides `scan.max_depth`.
pub const ENV_MAX_DEPTH: &str = "PATHSCOUT_MAX_DEPTH";
/// Overrides `scan.follow_symlinks`.
pub const ENV_FOLLOW_SYMLINKS: &str = "PATHSCOUT_FOLLOW_SYMLINKS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathscout::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(root) = Self::var(ENV_PROJECT_ROOT) {
            config.project_root = Some(PathBuf::from(root));
        }

        if let Some(name) = Self::var(ENV_DISTRIBUTED_ROOT) {
            config.roots.get_or_insert_with(Default::default).distributed = Some(name);
        }

        if let Some(name) = Self::var(ENV_DEVELOPMENT_ROOT) {
            config.roots.get_or_insert_with(Default::default).development = Some(name);
        }

        if let Some(anchor) = Self::var(ENV_ANCHOR) {
            config.anchor = Some(anchor);
        }

        if let Some(depth) = Self::var(ENV_MAX_DEPTH) {
            let depth = depth.trim().parse().map_err(|_| Error::Validation {
                field: ENV_MAX_DEPTH.into(),
                message: format!("Must be a positive integer, got '{depth}'"),
            })?;
            config.scan.get_or_insert_with(Default::default).max_depth = Some(depth);
        }

        if let Some(val) = Self::var(ENV_FOLLOW_SYMLINKS) {
            config.scan.get_or_insert_with(Default::default).follow_symlinks =
                Some(Self::parse_bool(ENV_FOLLOW_SYMLINKS, &val)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }

    /// Parse boolean from environment variable string.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
