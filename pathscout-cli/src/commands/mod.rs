//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Print canonical forms of paths
//! - `dirs`: List leaf or child directories
//! - `find`: Filtered recursive file search
//! - `resolve`: Package root resolution
//! - `relative`: Anchor-relative paths
//! - `validate`: Validate configuration file
//! - `completions`: Shell completion scripts

pub mod completions;
pub mod dirs;
pub mod find;
pub mod normalize;
pub mod relative;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use dirs::DirsCommand;
pub use find::FindCommand;
pub use normalize::NormalizeCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
