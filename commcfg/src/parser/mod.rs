//! Record parsers and the parser capability.
//!
//! A [`ConfigParser`] turns one loaded source into the two configuration
//! records. The record extraction itself lives in [`records`] and works on a
//! [`crate::RawConfigMap`], so new source formats only need to produce that
//! map.
//!
//! # Examples
//!
//! ```
//! use commcfg::parser::{ConfigParser, IniParser};
//! use commcfg::RawConfigMap;
//!
//! let parser = IniParser::from_map(RawConfigMap::parse(
//!     "ip=10.0.0.1\nport=8080\nprotocol=TCP\n\
//!      baudrate=9600\ndata_bits=8\nparity=None\nstop_bits=1",
//! ));
//!
//! assert_eq!(parser.parse_transport().unwrap().port, 8080);
//! assert_eq!(parser.parse_serial().unwrap().baudrate, 9600);
//! ```

mod ini;
pub mod records;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::record::{SerialConfig, TransportConfig};

pub use ini::IniParser;
pub use records::{
    inspect, parse_serial, parse_transport, required_fields, FieldReport, FieldStatus,
};

/// Source formats a parser can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// Line-oriented `key=value` files with the `.ini` extension.
    Ini,
}

impl ConfigFormat {
    /// Every supported format.
    pub const ALL: [Self; 1] = [Self::Ini];

    /// The file extension (without dot) for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ini => "ini",
        }
    }

    /// Selects the format from the end of a path's file name.
    ///
    /// The name must end in `.` followed by the format's extension, matched
    /// case-sensitively, so a file named `.ini` qualifies. Returns `None` for
    /// unsupported or missing extensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use commcfg::parser::ConfigFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.ini")), Some(ConfigFormat::Ini));
    /// assert_eq!(ConfigFormat::from_path(Path::new("config.json")), None);
    /// assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
    /// assert_eq!(ConfigFormat::from_path(Path::new(".ini")), Some(ConfigFormat::Ini));
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        Self::ALL.into_iter().find(|format| {
            name.strip_suffix(format.extension())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ini => write!(f, "ini"),
        }
    }
}

/// Capability shared by every source format.
///
/// Both operations are independent: one record may fail while the other
/// succeeds, and calling either repeatedly yields the same result.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigParser: fmt::Debug {
    /// The source format this parser reads.
    fn format(&self) -> ConfigFormat;

    /// Produces the transport record.
    ///
    /// # Errors
    ///
    /// Returns a parse error if any transport field is missing or invalid.
    fn parse_transport(&self) -> Result<TransportConfig>;

    /// Produces the serial record.
    ///
    /// # Errors
    ///
    /// Returns a parse error if any serial field is missing or invalid.
    fn parse_serial(&self) -> Result<SerialConfig>;
}
