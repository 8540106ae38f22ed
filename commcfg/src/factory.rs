//! Parser selection.
//!
//! Picks a [`ConfigParser`] implementation for a file path.

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};
use crate::parser::{ConfigFormat, ConfigParser, IniParser};

/// Checks that `path` can be opened and names a supported format.
///
/// Readability is checked before the extension, so a missing `config.toml`
/// reports `FileOpenFailed` rather than `InvalidFormat`.
///
/// # Errors
///
/// - [`Error::FileOpenFailed`] if the file cannot be opened.
/// - [`Error::InvalidFormat`] if the extension names no supported format.
pub fn select_format(path: &Path) -> Result<ConfigFormat> {
    File::open(path).map_err(|source| Error::FileOpenFailed {
        path: path.to_path_buf(),
        source,
    })?;

    ConfigFormat::from_path(path).ok_or_else(|| Error::InvalidFormat {
        path: path.to_path_buf(),
    })
}

/// Builds the parser for the file at `path`.
///
/// The file must be readable and carry a supported extension.
///
/// # Errors
///
/// - [`Error::FileOpenFailed`] if the file cannot be opened or read.
/// - [`Error::InvalidFormat`] if the extension names no supported format.
///
/// # Examples
///
/// ```no_run
/// use commcfg::{create_parser, ConfigurationManager};
/// use std::path::Path;
///
/// let parser = create_parser(Path::new("config.ini")).unwrap();
/// let manager = ConfigurationManager::new(parser);
/// println!("{}", manager.transport_config().unwrap());
/// ```
pub fn create_parser(path: &Path) -> Result<Box<dyn ConfigParser>> {
    let format = select_format(path)?;

    log::debug!("Selected {format} parser for {}", path.display());
    match format {
        ConfigFormat::Ini => Ok(Box::new(IniParser::open(path)?)),
    }
}
