//! Typed configuration records.
//!
//! Records are only ever produced fully populated; the parsers in
//! [`crate::parser`] return an error rather than a partial record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::Choice;

/// Names a record type in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// [`TransportConfig`].
    Transport,
    /// [`SerialConfig`].
    Serial,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Serial => write!(f, "serial"),
        }
    }
}

/// Transport protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    /// Stream transport.
    #[serde(rename = "TCP")]
    Tcp,
    /// Datagram transport.
    #[serde(rename = "UDP")]
    Udp,
}

impl Choice for Protocol {
    const ALL: &'static [Self] = &[Self::Tcp, Self::Udp];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serial parity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// No parity bit.
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
}

impl Choice for Parity {
    const ALL: &'static [Self] = &[Self::None, Self::Even, Self::Odd];

    fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Even => "Even",
            Self::Odd => "Odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network transport settings.
///
/// # Examples
///
/// ```
/// use commcfg::{Protocol, TransportConfig};
///
/// let config = TransportConfig {
///     ip: "10.0.0.1".to_string(),
///     port: 8080,
///     protocol: Protocol::Tcp,
/// };
/// assert_eq!(config.to_string(), "10.0.0.1:8080/TCP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Host address. Any non-empty string is accepted.
    pub ip: String,
    /// Port number.
    pub port: u32,
    /// Transport protocol.
    pub protocol: Protocol,
}

impl TransportConfig {
    /// Source keys read by the transport parser, in display order.
    pub const KEYS: [&'static str; 3] = ["ip", "port", "protocol"];
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.ip, self.port, self.protocol)
    }
}

/// Serial port settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Line speed in bits per second.
    pub baudrate: u32,
    /// Data bits per frame.
    pub data_bits: u32,
    /// Parity mode.
    pub parity: Parity,
    /// Stop bits per frame.
    pub stop_bits: u32,
}

impl SerialConfig {
    /// Source keys read by the serial parser, in display order.
    pub const KEYS: [&'static str; 4] = ["baudrate", "data_bits", "parity", "stop_bits"];
}

impl fmt::Display for SerialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 9600 8N1 style
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Even => 'E',
            Parity::Odd => 'O',
        };
        write!(
            f,
            "{} {}{}{}",
            self.baudrate, self.data_bits, parity, self.stop_bits
        )
    }
}
