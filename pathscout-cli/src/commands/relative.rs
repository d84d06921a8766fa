//! Command to show anchor-relative paths.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use pathscout::path;

/// Show a path relative to its anchor segment.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path containing the anchor segment
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Anchor segment (defaults to the configured anchor)
    #[arg(long, value_name = "NAME")]
    pub anchor: Option<String>,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let anchor = match self.anchor {
            Some(anchor) => anchor,
            None => load_configuration(global)?.anchor().to_string(),
        };

        match path::to_project_relative(&self.path, &anchor) {
            Some(relative) => {
                println!("{relative}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "no '{anchor}' segment in {}",
                path::normalize(&self.path)
            ))),
        }
    }
}
