//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "apkrepo";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        let hint = match self.shell {
            Shell::Bash => "apkrepo completions bash > ~/.local/share/bash-completion/completions/apkrepo",
            Shell::Zsh => "apkrepo completions zsh > ~/.zsh/completions/_apkrepo",
            Shell::Fish => "apkrepo completions fish > ~/.config/fish/completions/apkrepo.fish",
            Shell::PowerShell => "apkrepo completions powershell | Out-String | Invoke-Expression",
            _ => "apkrepo completions <shell> and source the output",
        };
        global.logger.info(&format!("To enable completions: {hint}"));

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
