//! Error types for the apkrepo library.
//!
//! Every configuration problem is detected eagerly while loading and carries
//! the name of the offending option, so the operator can fix the settings
//! document before any build or signing work starts.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an apkrepo error.
///
/// # Examples
///
/// ```
/// use apkrepo::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/usr/share/java")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the apkrepo library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required option is absent from the settings document.
    #[error("missing required option '{name}'")]
    MissingRequiredOption {
        /// The option that was not supplied.
        name: String,
    },

    /// An option value has the wrong type or is inconsistent with another option.
    #[error("malformed option '{name}': {reason}")]
    MalformedOption {
        /// The option that failed validation.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The settings document names an option that is not part of the schema.
    #[error("unknown option '{name}'")]
    UnknownOption {
        /// The unrecognized option name.
        name: String,
    },

    /// The settings document could not be parsed at all.
    #[error("cannot parse settings document: {message}")]
    Parse {
        /// Parser diagnostics.
        message: String,
    },

    /// The settings file itself could not be read (missing, unreadable or
    /// not UTF-8).
    #[error("cannot read settings file {}: {reason}", path.display())]
    UnreadableSettings {
        /// The settings file.
        path: PathBuf,
        /// The underlying read failure.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configured path does not exist at the point of use.
    #[error("path for '{option}' not found: {}", path.display())]
    PathNotFound {
        /// The option holding the path.
        option: String,
        /// The path that was not found.
        path: PathBuf,
    },
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Shorthand for building a [`Error::MalformedOption`].
    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedOption {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns the option name this error refers to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use apkrepo::Error;
    ///
    /// let err = Error::UnknownOption { name: "foo_bar".to_string() };
    /// assert_eq!(err.option_name(), Some("foo_bar"));
    /// ```
    #[must_use]
    pub fn option_name(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredOption { name }
            | Self::MalformedOption { name, .. }
            | Self::UnknownOption { name } => Some(name),
            Self::PathNotFound { option, .. } => Some(option),
            _ => None,
        }
    }

    /// Check if error indicates a configured path does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if the error was raised while validating the settings document.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredOption { .. }
                | Self::MalformedOption { .. }
                | Self::UnknownOption { .. }
                | Self::Parse { .. }
                | Self::UnreadableSettings { .. }
        )
    }
}
