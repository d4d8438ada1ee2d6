//! Command to validate a settings file.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Validate a settings file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Settings file to validate (default: the resolved settings file)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(ref path) = self.config_path {
            if !path.exists() {
                return Err(CliError::InvalidArguments(format!(
                    "File not found: {}",
                    path.display()
                )));
            }
        }

        match load_configuration(self.config_path.as_deref(), global) {
            Ok(config) => {
                global.logger.info(&format!(
                    "Repository '{}' at {} ({})",
                    config.repo_name(),
                    config.repo_url(),
                    if config.is_signed() { "signed" } else { "unsigned" }
                ));
                global.logger.info(&format!(
                    "{} key alias override(s)",
                    config.keyaliases().len()
                ));
                println!("Configuration is valid");
                Ok(())
            }
            Err(CliError::Library(e)) if e.is_configuration() => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
            Err(e) => Err(e),
        }
    }
}
