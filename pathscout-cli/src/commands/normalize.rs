//! Command to print canonical path forms.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathscout::path;

/// Print the canonical form of each path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print the absolute form, resolved against the current directory
    #[arg(long)]
    pub absolute: bool,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let cwd = std::env::current_dir()?;
        for raw in &self.paths {
            let canonical = if self.absolute {
                path::full_path(raw, &cwd)?
            } else {
                path::normalize(raw)
            };
            println!("{canonical}");
        }
        Ok(())
    }
}
