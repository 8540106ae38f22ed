//! Build script for commcfg-cli.
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
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("commcfg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Load and check transport and serial settings from key=value files")
        .long_about(
            "Command-line tool that loads a key=value configuration file and reports \
             its validated transport and serial settings",
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
                .help("Configuration file to load")
                .value_name("PATH")
                .global(true)
                .default_value("config.ini")
                .env("COMMCFG_CONFIG"),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Print the transport and serial settings")
                .long_about(
                    "Print both records, transport first; stops at the first record that \
                     fails to load",
                ),
            Command::new("validate")
                .about("Report the status of every required field")
                .long_about("List each required key as ok, invalid, or missing"),
            Command::new("dump")
                .about("Print the raw key/value pairs read from the file")
                .long_about("Print the stored pairs sorted by key, before validation"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("commcfg.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
