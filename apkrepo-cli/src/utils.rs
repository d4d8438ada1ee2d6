//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! settings-file resolution used by the commands that read configuration.

use crate::error::CliError;
use apkrepo::{BuildConfiguration, ConfigLoader, Logger};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Explicit settings file.
    pub config: Option<PathBuf>,

    /// Logger configured from the verbosity flags.
    pub logger: Logger,
}

/// Resolve the settings file to load.
///
/// Priority: explicit path > `--config`/`APKREPO_CONFIG` > nearest
/// `apkrepo.yaml` above the current directory > `~/.apkrepo/apkrepo.yaml`.
pub fn resolve_config_file(
    explicit: Option<&Path>,
    global: &GlobalOptions,
) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit.or(global.config.as_deref()) {
        return Ok(path.to_path_buf());
    }

    let cwd = env::current_dir()?;
    ConfigLoader::locate(&cwd).ok_or_else(|| {
        CliError::Config(format!(
            "no {} found in {} or its parents (use --config or run `apkrepo init`)",
            apkrepo::config::CONFIG_FILE_NAME,
            cwd.display()
        ))
    })
}

/// Load the build configuration, applying `APKREPO_*` overrides.
pub fn load_configuration(
    explicit: Option<&Path>,
    global: &GlobalOptions,
) -> Result<BuildConfiguration, CliError> {
    let path = resolve_config_file(explicit, global)?;
    global
        .logger
        .info(&format!("Loading settings from {}", path.display()));

    ConfigLoader::load_file_with_env(&path).map_err(CliError::from)
}
