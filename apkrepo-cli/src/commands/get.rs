//! Command to print the value of one option.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use apkrepo::{OptionName, OptionValue};
use clap::Args;

/// Print the value of one option.
///
/// Unset options print nothing; `keyaliases` prints one `app=alias` line
/// per override.
#[derive(Args)]
pub struct GetCommand {
    /// Option name, e.g. sdk_path
    #[arg(value_name = "KEY")]
    pub key: String,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Reject typos before touching the settings file
        let name: OptionName = self
            .key
            .parse()
            .map_err(|e: apkrepo::Error| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(None, global)?;

        match config.value(name) {
            OptionValue::Str(value) => println!("{value}"),
            OptionValue::Unset => global.logger.info(&format!("{name} is not set")),
            OptionValue::Map(map) => {
                for (app_id, alias) in map {
                    println!("{app_id}={alias}");
                }
            }
        }
        Ok(())
    }
}
