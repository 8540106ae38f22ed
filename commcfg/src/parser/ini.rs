//! `key=value` file parser.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::{SerialConfig, TransportConfig};
use crate::store::RawConfigMap;

use super::{records, ConfigFormat, ConfigParser};

/// Parser for `.ini` style `key=value` files.
///
/// The source is read once at construction; both record queries then work on
/// the stored entries.
#[derive(Debug, Clone)]
pub struct IniParser {
    path: Option<PathBuf>,
    entries: RawConfigMap,
}

impl IniParser {
    /// Reads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a `FileOpenFailed` error if the file cannot be opened or read.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = RawConfigMap::load(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            entries,
        })
    }

    /// Wraps entries that were loaded elsewhere.
    #[must_use]
    pub fn from_map(entries: RawConfigMap) -> Self {
        Self {
            path: None,
            entries,
        }
    }

    /// The file this parser was read from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The loaded key-value entries.
    #[must_use]
    pub fn entries(&self) -> &RawConfigMap {
        &self.entries
    }
}

impl ConfigParser for IniParser {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Ini
    }

    fn parse_transport(&self) -> Result<TransportConfig> {
        records::parse_transport(&self.entries)
    }

    fn parse_serial(&self) -> Result<SerialConfig> {
        records::parse_serial(&self.entries)
    }
}
