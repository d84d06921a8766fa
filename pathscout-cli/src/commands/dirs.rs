//! Command to list directories.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathscout::RecursiveScanner;
use std::path::PathBuf;

/// List the leaf directories under a directory.
#[derive(Args)]
pub struct DirsCommand {
    /// Directory to scan
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// List only the immediate child directories
    #[arg(long)]
    pub children: bool,
}

impl DirsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let scanner = RecursiveScanner::with_options(config.scan_options());

        let dirs = if self.children {
            scanner.list_children(&self.dir)?
        } else {
            scanner.recursive_list_directories(&self.dir)?
        };

        for dir in dirs {
            println!("{dir}");
        }
        Ok(())
    }
}
