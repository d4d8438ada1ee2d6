//! Init command implementation.
//!
//! Writes the sample settings file for the operator to edit.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use apkrepo::config::{template, CONFIG_FILE_NAME};
use clap::Parser;
use std::path::PathBuf;

/// Write the sample settings file.
#[derive(Parser)]
pub struct InitCommand {
    /// Where to write the file (default: --config, else ./apkrepo.yaml)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl InitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = self
            .path
            .or_else(|| global.config.clone())
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        template::write_template(&path, self.force)?;

        global
            .logger
            .warn("the template contains placeholder paths and passwords; edit it before use");
        println!("Wrote settings template to {}", path.display());
        Ok(())
    }
}
