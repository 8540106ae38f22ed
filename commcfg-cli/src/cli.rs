//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, DumpCommand, ShowCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.ini";

/// Command-line tool for inspecting transport and serial configuration files.
#[derive(Parser)]
#[command(name = "commcfg")]
#[command(
    version,
    about = "Load and check transport and serial settings from key=value files",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file to load
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "COMMCFG_CONFIG",
        default_value = DEFAULT_CONFIG
    )]
    pub config: PathBuf,

    /// Command to run (defaults to `show`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the transport and serial settings
    Show(ShowCommand),

    /// Report the status of every required field
    Validate(ValidateCommand),

    /// Print the raw key/value pairs read from the file
    Dump(DumpCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
