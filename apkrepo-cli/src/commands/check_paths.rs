//! Command to check that every configured path exists.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Check that the tool, SDK, NDK and keystore paths exist.
#[derive(Args)]
pub struct CheckPathsCommand {}

impl CheckPathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(None, global)?;
        let report = config.path_report();

        for status in &report {
            let marker = if status.exists { "ok" } else { "missing" };
            println!("{:<12} {:<8} {}", status.option, marker, status.path.display());
        }

        let missing = report.iter().filter(|s| !s.exists).count();
        if missing == 0 {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{missing} configured path(s) do not exist"
            )))
        }
    }
}
