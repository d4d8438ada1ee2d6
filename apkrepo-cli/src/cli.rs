//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckPathsCommand, CompletionsCommand, GetCommand, InitCommand, KeyAliasCommand, ShowCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for checking and inspecting repository build settings.
#[derive(Parser)]
#[command(name = "apkrepo")]
#[command(version, about = "Validate and inspect repository build settings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Settings file to load (default: nearest apkrepo.yaml)
    #[arg(long, value_name = "PATH", global = true, env = "APKREPO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate a settings file
    Validate(ValidateCommand),

    /// Print the value of one option
    Get(GetCommand),

    /// Print the key alias override for an application
    KeyAlias(KeyAliasCommand),

    /// Print the whole configuration
    Show(ShowCommand),

    /// Check that every configured path exists
    CheckPaths(CheckPathsCommand),

    /// Write the sample settings file
    Init(InitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
