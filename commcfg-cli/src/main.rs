//! Main entry point for the commcfg CLI.
//!
//! Loads a `key=value` configuration file and reports its transport and
//! serial settings:
//! - `show`: Print both records (the default)
//! - `validate`: Report the status of every required field
//! - `dump`: Print the raw key/value pairs
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::ShowCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records through our logger
    if let Err(e) = commcfg::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let command = cli
        .command
        .unwrap_or_else(|| cli::Command::Show(ShowCommand::implicit()));
    let result = match command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Dump(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            match e.label() {
                Some(label) => eprintln!("Error [{label}]: {e}"),
                None => eprintln!("Error: {e}"),
            }
            std::process::exit(e.exit_code());
        }
    }
}
