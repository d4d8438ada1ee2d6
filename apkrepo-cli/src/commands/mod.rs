//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `validate`: Validate a settings file
//! - `get`: Print the value of one option
//! - `key_alias`: Print the key alias override for an application
//! - `show`: Print the whole configuration
//! - `check_paths`: Check that every configured path exists
//! - `init`: Write the sample settings file
//! - `completions`: Generate shell completion scripts

pub mod check_paths;
pub mod completions;
pub mod get;
pub mod init;
pub mod key_alias;
pub mod show;
pub mod validate;

pub use check_paths::CheckPathsCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use init::InitCommand;
pub use key_alias::KeyAliasCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
