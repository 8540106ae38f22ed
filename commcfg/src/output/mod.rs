//! Output formatting for configuration records.
//!
//! This module renders loaded records as human-readable text, JSON, YAML, or
//! back into the `key=value` source format.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::record::{SerialConfig, TransportConfig};
use crate::Result;

pub use formatters::{HumanFormatter, IniFormatter, JsonFormatter, YamlFormatter};

/// The records to render. Absent records are left out of the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Records {
    /// Transport settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportConfig>,
    /// Serial settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<SerialConfig>,
}

impl Records {
    /// Returns `true` if neither record is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transport.is_none() && self.serial.is_none()
    }
}

/// Trait for formatting records into different output formats.
pub trait OutputFormatter {
    /// Format the given records into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, records: &Records) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Human,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// `key=value` lines that load back to the same records.
    Ini,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Ini => Box::new(IniFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Ini => write!(f, "ini"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "ini" => Ok(Self::Ini),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
