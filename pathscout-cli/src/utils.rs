//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading and project root resolution.

use crate::error::CliError;
use pathscout::{Config, ConfigBuilder, ProjectRoots};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the project root.
    pub project_root: Option<PathBuf>,

    /// Override the directory holding the user `config.yaml`.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_working_dir(env::current_dir()?);

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_data_dir(dir);
    }

    if let Some(ref root) = global.project_root {
        builder = builder.with_config(Config {
            project_root: Some(root.clone()),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Project roots from the effective configuration.
///
/// A relative project root is taken relative to the current directory.
pub fn project_roots(config: &Config) -> Result<ProjectRoots, CliError> {
    let working_dir = env::current_dir()?;
    config
        .project_roots(&working_dir)
        .map_err(|e| CliError::Config(e.to_string()))
}
