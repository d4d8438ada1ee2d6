//! Main entry point for the apkrepo CLI.
//!
//! This is the command-line interface over the apkrepo settings loader.
//! It provides commands for checking and inspecting build settings:
//! - `validate`: Validate a settings file
//! - `get`: Print the value of one option
//! - `key-alias`: Print the key alias override for an application
//! - `show`: Print the whole configuration
//! - `check-paths`: Check that every configured path exists
//! - `init`: Write the sample settings file
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = apkrepo::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        config: cli.config,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::KeyAlias(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::CheckPaths(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
