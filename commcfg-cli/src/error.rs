//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use commcfg::{Error as LibError, ErrorKind};
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error while writing output.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: A record failed to parse
    /// - 2: Reserved for usage errors reported by clap
    /// - 3: The configuration file could not be opened
    /// - 4: The file extension names no supported format
    /// - 5: Unknown error (no parser bound, serialization failure)
    /// - 6: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(e) => match e.kind() {
                ErrorKind::ParseError => 1,
                ErrorKind::FileOpenFailed => 3,
                ErrorKind::InvalidFormat => 4,
                ErrorKind::Unknown => 5,
            },
            CliError::Io(_) => 6,
        }
    }

    /// Label printed in front of the message, if the error has one.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CliError::Library(e) => Some(e.kind().label()),
            CliError::Io(_) => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
