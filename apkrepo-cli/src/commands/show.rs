//! Command to print the whole configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// YAML, loadable as a settings file when secrets are shown.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Print the whole configuration, defaults included.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ShowFormat::Yaml)]
    pub format: ShowFormat,

    /// Print passwords instead of [REDACTED]
    #[arg(long)]
    pub show_secrets: bool,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(None, global)?;
        let document = config.to_document(self.show_secrets);

        let rendered = match self.format {
            ShowFormat::Yaml => serde_yaml::to_string(&document)
                .map_err(|e| CliError::Config(format!("cannot render YAML: {e}")))?,
            ShowFormat::Json => serde_json::to_string_pretty(&document)
                .map_err(|e| CliError::Config(format!("cannot render JSON: {e}")))?,
        };

        println!("{}", rendered.trim_end());
        Ok(())
    }
}
