//! Command to print the key alias override for an application.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Print the key alias override for an application.
///
/// Exits with status 1 when there is no override, so scripts can fall back
/// to their own alias scheme.
#[derive(Args)]
pub struct KeyAliasCommand {
    /// Application id, e.g. com.example.app
    #[arg(value_name = "APP_ID")]
    pub application_id: String,
}

impl KeyAliasCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(None, global)?;

        match config.resolve_key_alias(&self.application_id) {
            Some(alias) => {
                println!("{alias}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "no override for {}",
                self.application_id
            ))),
        }
    }
}
