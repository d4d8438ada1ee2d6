//! Build script for apkrepo-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("apkrepo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and inspect repository build settings")
        .long_about(
            "Command-line tool for validating and inspecting the settings of an Android \
             application repository build",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file to load (default: nearest apkrepo.yaml)")
                .value_name("PATH")
                .global(true)
                .env("APKREPO_CONFIG"),
        )
        .subcommands(vec![
            Command::new("validate")
                .about("Validate a settings file")
                .long_about("Load a settings file and report the first problem found"),
            Command::new("get")
                .about("Print the value of one option")
                .long_about("Print a configured value or its documented default"),
            Command::new("key-alias")
                .about("Print the key alias override for an application")
                .long_about("Print the keyaliases entry for an application id, or exit 1"),
            Command::new("show")
                .about("Print the whole configuration")
                .long_about("Print every option as YAML or JSON, with passwords redacted"),
            Command::new("check-paths")
                .about("Check that every configured path exists")
                .long_about("Report the tool, SDK, NDK and keystore paths that are missing"),
            Command::new("init")
                .about("Write the sample settings file")
                .long_about("Write the sample settings file for the operator to edit"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("apkrepo.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
