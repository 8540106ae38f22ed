//! Dump command implementation.
//!
//! Prints the raw key/value pairs exactly as the loader stored them, sorted
//! by key, before any field validation.

use crate::error::CliError;
use crate::utils::{open_ini, write_stdout, GlobalOptions};
use clap::Args;
use commcfg::RawConfigMap;

/// Print the raw key/value pairs read from the file.
#[derive(Args)]
pub struct DumpCommand {
    /// Print only the keys
    #[arg(long)]
    pub keys_only: bool,
}

impl DumpCommand {
    /// Execute the dump command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let parser = open_ini(global)?;
        let entries = parser.entries();
        log::debug!(
            "{} entries loaded from {}",
            entries.len(),
            global.config.display()
        );

        if entries.is_empty() {
            return Ok(());
        }
        write_stdout(&self.render(entries))
    }

    fn render(&self, entries: &RawConfigMap) -> String {
        if self.keys_only {
            entries.keys().collect::<Vec<_>>().join("\n")
        } else {
            entries
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}
