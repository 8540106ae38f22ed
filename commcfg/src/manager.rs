//! Configuration facade.
//!
//! [`ConfigurationManager`] owns at most one parser and forwards record
//! queries to it. Callers never need to know which source format is in use.

use crate::error::{Error, Result};
use crate::parser::{ConfigFormat, ConfigParser};
use crate::record::{SerialConfig, TransportConfig};

/// Front door for reading configuration records.
///
/// # Examples
///
/// ```
/// use commcfg::{ConfigurationManager, ErrorKind, IniParser, RawConfigMap};
///
/// let parser = IniParser::from_map(RawConfigMap::parse("ip=h\nport=1\nprotocol=UDP"));
/// let manager = ConfigurationManager::new(Box::new(parser));
/// assert_eq!(manager.transport_config().unwrap().port, 1);
///
/// let unbound = ConfigurationManager::unbound();
/// assert_eq!(unbound.serial_config().unwrap_err().kind(), ErrorKind::Unknown);
/// ```
#[derive(Default)]
pub struct ConfigurationManager {
    parser: Option<Box<dyn ConfigParser>>,
}

impl ConfigurationManager {
    /// Creates a manager that owns `parser`.
    #[must_use]
    pub fn new(parser: Box<dyn ConfigParser>) -> Self {
        Self {
            parser: Some(parser),
        }
    }

    /// Creates a manager with no parser bound.
    ///
    /// Every query on it fails with an `Unknown` error.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Returns `true` if a parser is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.parser.is_some()
    }

    /// The format of the bound parser, if any.
    #[must_use]
    pub fn format(&self) -> Option<ConfigFormat> {
        self.parser.as_ref().map(|parser| parser.format())
    }

    /// Returns the transport record from the bound parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParser`] if no parser is bound, otherwise whatever
    /// the parser returns.
    pub fn transport_config(&self) -> Result<TransportConfig> {
        self.bound_parser()?.parse_transport()
    }

    /// Returns the serial record from the bound parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParser`] if no parser is bound, otherwise whatever
    /// the parser returns.
    pub fn serial_config(&self) -> Result<SerialConfig> {
        self.bound_parser()?.parse_serial()
    }

    fn bound_parser(&self) -> Result<&dyn ConfigParser> {
        self.parser.as_deref().ok_or(Error::NoParser)
    }
}

impl std::fmt::Debug for ConfigurationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationManager")
            .field("format", &self.format())
            .finish()
    }
}
