//! Settings file discovery and loading.
//!
//! Loading is single-shot: the settings document is read, validated and
//! turned into a [`BuildConfiguration`] once at startup. Nothing here touches
//! the paths the configuration refers to.

use crate::config::document::SettingsDocument;
use crate::config::environment::EnvironmentConfig;
use crate::config::schema::BuildConfiguration;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked for when discovering the settings document.
pub const CONFIG_FILE_NAME: &str = "apkrepo.yaml";

/// Directory under the home directory holding the per-user settings file.
pub const USER_CONFIG_DIR: &str = ".apkrepo";

/// Loads build configuration from settings documents.
///
/// # Examples
///
/// ```no_run
/// use apkrepo::ConfigLoader;
/// use std::path::Path;
///
/// let path = ConfigLoader::locate(Path::new(".")).expect("no apkrepo.yaml found");
/// let config = ConfigLoader::load_file(&path).unwrap();
/// println!("Publishing {} to {}", config.repo_name(), config.repo_url());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a settings document held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`], [`Error::UnknownOption`],
    /// [`Error::MissingRequiredOption`] or [`Error::MalformedOption`] as
    /// described on [`SettingsDocument::parse`] and [`ConfigValidator::validate`].
    pub fn load_str(source: &str) -> Result<BuildConfiguration> {
        let doc = SettingsDocument::parse(source)?;
        ConfigValidator::validate(&doc)
    }

    /// Load and validate a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableSettings`] if the file cannot be read, otherwise
    /// the same errors as [`load_str`](Self::load_str).
    pub fn load_file(path: &Path) -> Result<BuildConfiguration> {
        let doc = Self::read_document(path)?;
        ConfigValidator::validate(&doc)
    }

    /// Load a settings file, applying `APKREPO_*` environment overrides
    /// before validation.
    ///
    /// # Errors
    ///
    /// Same as [`load_file`](Self::load_file).
    pub fn load_file_with_env(path: &Path) -> Result<BuildConfiguration> {
        let mut doc = Self::read_document(path)?;
        let overridden = EnvironmentConfig::apply_overrides(&mut doc);
        if !overridden.is_empty() {
            log::debug!("{} option(s) overridden from environment", overridden.len());
        }
        ConfigValidator::validate(&doc)
    }

    /// Read and parse a settings file without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnreadableSettings`] if the file cannot be read, or the
    /// parse errors of [`SettingsDocument::parse`].
    pub fn read_document(path: &Path) -> Result<SettingsDocument> {
        log::debug!("loading settings from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| Error::UnreadableSettings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        SettingsDocument::parse(&contents)
    }

    /// Find the settings file by walking up from `start_dir`.
    ///
    /// Returns the first `apkrepo.yaml` found, or `None` at the filesystem root.
    #[must_use]
    pub fn discover(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                log::debug!("discovered settings file {}", candidate.display());
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Path of the per-user settings file, `~/.apkrepo/apkrepo.yaml`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// Locate the settings file to use.
    ///
    /// A project file found by [`discover`](Self::discover) wins over the
    /// per-user file; the per-user file is only returned if it exists.
    #[must_use]
    pub fn locate(start_dir: &Path) -> Option<PathBuf> {
        Self::discover(start_dir)
            .or_else(|| Self::user_config_path().filter(|path| path.is_file()))
    }
}
