//! CLI command implementations.
//!
//! - `show`: Print the transport and serial settings
//! - `validate`: Report the status of every required field
//! - `dump`: Print the raw key/value pairs
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod dump;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use dump::DumpCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
