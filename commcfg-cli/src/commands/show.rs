//! Show command implementation.
//!
//! This module implements the `show` command, which loads the configuration
//! file and prints both records in the requested format. It is also what
//! runs when no subcommand is given.

use crate::error::CliError;
use crate::utils::{open_manager, write_stdout, GlobalOptions};
use clap::{Parser, ValueEnum};
use commcfg::output::{OutputFormat as LibOutputFormat, Records};

/// Print the transport and serial settings.
#[derive(Parser)]
pub struct ShowCommand {
    /// Print only one record
    #[arg(long, value_enum, value_name = "RECORD")]
    pub only: Option<RecordSelection>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "human",
        env = "COMMCFG_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Record filter for the show command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RecordSelection {
    /// Transport settings only
    Transport,
    /// Serial settings only
    Serial,
}

/// Output format for the show command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One summary line per record
    Human,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// key=value lines
    Ini,
}

impl From<OutputFormat> for LibOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => LibOutputFormat::Human,
            OutputFormat::Json => LibOutputFormat::Json,
            OutputFormat::Yaml => LibOutputFormat::Yaml,
            OutputFormat::Ini => LibOutputFormat::Ini,
        }
    }
}

impl ShowCommand {
    /// The command as run without a subcommand, with flags taken from the
    /// environment and defaults.
    pub fn implicit() -> Self {
        Self::parse_from(["show"])
    }

    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let manager = open_manager(global)?;

        // Transport is queried first; the first failure ends the command.
        let mut records = Records::default();
        if self.only != Some(RecordSelection::Serial) {
            records.transport = Some(manager.transport_config()?);
        }
        if self.only != Some(RecordSelection::Transport) {
            records.serial = Some(manager.serial_config()?);
        }

        let formatter = LibOutputFormat::from(self.format).create_formatter();
        let output = formatter.format(&records)?;
        write_stdout(&output)
    }
}
