//! Sample settings document.
//!
//! Operators start from this template (`apkrepo init`) and edit the values
//! for their system. The placeholder paths do not exist, which is fine:
//! paths are only checked at point of use.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// The sample settings document.
pub const SAMPLE_CONFIG: &str = r#"# Copy this file to apkrepo.yaml, then amend the settings below according to
# your system configuration.

aapt_path: /path/to/android-sdk-linux_86/platforms/android-4/tools/aapt
sdk_path: /path/to/android-sdk-linux_86
ndk_path: /path/to/android-ndk-r5

# You probably don't need to change this...
javacc_path: /usr/share/java

repo_url: http://f-droid.org/repo
repo_name: FDroid
repo_icon: fdroid-icon.png
repo_description: |
  The official FDroid repository. Applications in this repository are official
  binaries built by the original application developers.

# The key (from the keystore defined below) to be used for signing the
# repository itself. Leave null for an unsigned repository.
repo_keyalias: null

# If you're building a signed repository, you need the public key here, as a
# hex string. Leave as 'not set' for an unsigned repository.
repo_pubkey: not set

# The keystore to use for release keys when building. This needs to be
# somewhere safe and secure, and backed up!
keystore: /home/me/somewhere/my.keystore

# The password for the keystore. Can also be supplied as APKREPO_KEYSTOREPASS.
keystorepass: foo

# The password for keys - the same is used for each auto-generated key.
# Can also be supplied as APKREPO_KEYPASS.
keypass: foo2

# The distinguished name used for all keys.
keydname: "CN=Birdman, OU=Cell, O=Alcatraz, L=Alcatraz, S=California, C=US"

# Use this to override the auto-generated key aliases with specific ones
# for particular applications. Normally, just leave it empty.
keyaliases:
  com.example.app: example
"#;

/// Write [`SAMPLE_CONFIG`] to `path`.
///
/// # Errors
///
/// - [`Error::InvalidPath`] if `path` exists and `force` is false
/// - [`Error::Io`] if the file cannot be written
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "already exists (use --force to overwrite)".to_string(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SAMPLE_CONFIG)?;
    log::debug!("wrote settings template to {}", path.display());
    Ok(())
}
