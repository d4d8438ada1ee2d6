//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the binary from the caller's
//!   environment
//! - Settings document fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every test command.
const APKREPO_VARS: [&str; 17] = [
    "APKREPO_CONFIG",
    "APKREPO_LOG_MODE",
    "APKREPO_AAPT_PATH",
    "APKREPO_SDK_PATH",
    "APKREPO_NDK_PATH",
    "APKREPO_JAVACC_PATH",
    "APKREPO_REPO_URL",
    "APKREPO_REPO_NAME",
    "APKREPO_REPO_ICON",
    "APKREPO_REPO_DESCRIPTION",
    "APKREPO_REPO_KEYALIAS",
    "APKREPO_REPO_PUBKEY",
    "APKREPO_KEYSTORE",
    "APKREPO_KEYSTOREPASS",
    "APKREPO_KEYPASS",
    "APKREPO_KEYDNAME",
    "APKREPO_KEYALIASES",
];

/// A minimal valid settings document for an unsigned repository.
#[allow(dead_code)]
pub const MINIMAL_CONFIG: &str = "\
aapt_path: /nonexistent/sdk/tools/aapt
sdk_path: /nonexistent/sdk
ndk_path: /nonexistent/ndk
repo_url: http://f-droid.org/repo
repo_name: FDroid
keystore: /nonexistent/my.keystore
keystorepass: foo
keypass: foo2
keydname: CN=Birdman, OU=Cell, O=Alcatraz, L=Alcatraz, S=California, C=US
keyaliases:
  com.example.app: example
";

/// Test environment with an isolated working directory.
///
/// Commands run with the temporary directory as both working directory and
/// `HOME`, so settings discovery never escapes into the real home.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Create a test environment with `apkrepo.yaml` holding `content`.
    pub fn with_config(content: &str) -> Self {
        let env = Self::new();
        env.write_file("apkrepo.yaml", content);
        env
    }

    /// Get a command builder running in this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("apkrepo").expect("Failed to find apkrepo binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in APKREPO_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the test environment and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run apkrepo");

        assert!(
            output.status.success(),
            "apkrepo {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
