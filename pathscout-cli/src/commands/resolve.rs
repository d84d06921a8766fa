//! Command to resolve package locations.

use crate::error::CliError;
use crate::utils::{load_configuration, project_roots, GlobalOptions};
use clap::Args;
use pathscout::PackageLocationResolver;
use serde::Serialize;

/// Resolve which root a package directory lives under.
#[derive(Args)]
pub struct ResolveCommand {
    /// Package path relative to the distributed root
    #[arg(value_name = "DISTRIBUTED_REL")]
    pub distributed: String,

    /// Package path relative to the development root (defaults to DISTRIBUTED_REL)
    #[arg(value_name = "DEVELOPMENT_REL")]
    pub development: Option<String>,

    /// Print the absolute path instead of the project-relative one
    #[arg(long)]
    pub absolute: bool,

    /// Print the full resolution as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    location: pathscout::PackageLocation,
    distributed: &'a str,
    development: &'a str,
    project_path: Option<&'a str>,
    absolute_path: Option<&'a str>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let roots = project_roots(&config)?;

        let development = self.development.as_deref().unwrap_or(&self.distributed);
        let resolver = PackageLocationResolver::new(&self.distributed, development, &roots)?;

        if self.json {
            let report = ResolveReport {
                location: resolver.location(),
                distributed: resolver.distributed_path().as_str(),
                development: resolver.development_path().as_str(),
                project_path: resolver.resolved_project_path().map(|p| p.as_str()),
                absolute_path: resolver.resolved_absolute_path().map(|p| p.as_str()),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            let shown = if self.absolute {
                resolver.resolved_absolute_path()
            } else {
                resolver.resolved_project_path()
            };
            if let Some(path) = shown {
                if global.verbose {
                    eprintln!("found under {} root", resolver.location());
                }
                println!("{path}");
            }
        }

        match resolver.diagnostic() {
            Some(diagnostic) => Err(CliError::SemanticFailure(diagnostic.to_string())),
            None => Ok(()),
        }
    }
}
