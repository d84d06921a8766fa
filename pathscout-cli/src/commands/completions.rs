//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathscout";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Where the script is usually installed, when the shell has a convention.
    fn install_hint(&self) -> Option<&'static str> {
        match self.shell {
            Shell::Bash => Some("~/.local/share/bash-completion/completions/pathscout"),
            Shell::Zsh => Some("~/.zsh/completions/_pathscout (a directory on $fpath)"),
            Shell::Fish => Some("~/.config/fish/completions/pathscout.fish"),
            Shell::PowerShell => Some("$PROFILE"),
            _ => None,
        }
    }

    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = self.install_hint() {
                eprintln!("# Save with: {BIN_NAME} completions {} > {hint}", self.shell);
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
