//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DirsCommand, FindCommand, NormalizeCommand, RelativeCommand,
    ResolveCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for canonical paths, filtered scans and package roots.
#[derive(Parser)]
#[command(name = "pathscout")]
#[command(
    version,
    about = "Canonical path handling, filtered scanning and package root resolution",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the project root
    #[arg(long, value_name = "PATH", global = true, env = "PATHSCOUT_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Read the user config.yaml from this directory instead of ~/.pathscout
    #[arg(long, value_name = "PATH", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of paths
    Normalize(NormalizeCommand),

    /// List leaf directories, or immediate children
    Dirs(DirsCommand),

    /// Find files recursively with filters
    Find(FindCommand),

    /// Resolve which root a package lives under
    Resolve(ResolveCommand),

    /// Show a path relative to its anchor segment
    Relative(RelativeCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
