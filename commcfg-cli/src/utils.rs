//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: global options,
//! loading the configuration file, and writing to stdout.

use crate::error::CliError;
use commcfg::{create_parser, select_format, ConfigFormat, ConfigurationManager, IniParser};
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Logging flags are consumed by main.rs before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file to load.
    pub config: PathBuf,
}

/// Select a parser for the configured file and bind it to a manager.
pub fn open_manager(global: &GlobalOptions) -> Result<ConfigurationManager, CliError> {
    let parser = create_parser(&global.config)?;
    Ok(ConfigurationManager::new(parser))
}

/// Open the configured file as a concrete `key=value` parser.
///
/// Applies the same checks as [`open_manager`], but keeps access to the raw
/// entries for diagnostics.
pub fn open_ini(global: &GlobalOptions) -> Result<IniParser, CliError> {
    match select_format(&global.config)? {
        ConfigFormat::Ini => Ok(IniParser::open(&global.config)?),
    }
}

/// Write `text` followed by a newline to stdout.
pub fn write_stdout(text: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    stdout.flush()?;
    Ok(())
}
