//! Record extraction from a [`RawConfigMap`].
//!
//! Both parsers make a single pass over every entry. A recognized key whose
//! value validates sets its field and bumps the found-count; anything else is
//! ignored. The record is returned only when the found-count equals the
//! number of required fields.

use crate::error::{Error, Result};
use crate::record::{Parity, Protocol, RecordKind, SerialConfig, TransportConfig};
use crate::store::RawConfigMap;
use crate::validate::{parse_choice, parse_integer, parse_text, FieldShape};

const TRANSPORT_FIELDS: usize = TransportConfig::KEYS.len();
const SERIAL_FIELDS: usize = SerialConfig::KEYS.len();

/// Extracts a [`TransportConfig`] from `map`.
///
/// # Errors
///
/// Returns [`Error::Parse`] unless `ip`, `port` and `protocol` are all
/// present and valid.
///
/// # Examples
///
/// ```
/// use commcfg::parser::parse_transport;
/// use commcfg::{Protocol, RawConfigMap};
///
/// let map = RawConfigMap::parse("ip=10.0.0.1\nport=8080\nprotocol=TCP");
/// let config = parse_transport(&map).unwrap();
/// assert_eq!(config.port, 8080);
/// assert_eq!(config.protocol, Protocol::Tcp);
/// ```
pub fn parse_transport(map: &RawConfigMap) -> Result<TransportConfig> {
    let mut found = 0;
    let mut ip = None;
    let mut port = None;
    let mut protocol = None;

    for (key, value) in map {
        match key {
            "ip" => {
                if let Some(text) = parse_text(value) {
                    ip = Some(text.to_string());
                    found += 1;
                }
            }
            "port" => {
                if let Some(number) = parse_integer(value) {
                    port = Some(number);
                    found += 1;
                }
            }
            "protocol" => {
                if let Some(choice) = parse_choice::<Protocol>(value) {
                    protocol = Some(choice);
                    found += 1;
                }
            }
            _ => {}
        }
    }

    match (ip, port, protocol) {
        (Some(ip), Some(port), Some(protocol)) if found == TRANSPORT_FIELDS => {
            Ok(TransportConfig { ip, port, protocol })
        }
        _ => {
            log::debug!("Transport record incomplete: {found} of {TRANSPORT_FIELDS} fields valid");
            Err(Error::Parse {
                record: RecordKind::Transport,
                found,
                expected: TRANSPORT_FIELDS,
            })
        }
    }
}

/// Extracts a [`SerialConfig`] from `map`.
///
/// # Errors
///
/// Returns [`Error::Parse`] unless `baudrate`, `data_bits`, `parity` and
/// `stop_bits` are all present and valid.
pub fn parse_serial(map: &RawConfigMap) -> Result<SerialConfig> {
    let mut found = 0;
    let mut baudrate = None;
    let mut data_bits = None;
    let mut parity = None;
    let mut stop_bits = None;

    for (key, value) in map {
        let slot = match key {
            "baudrate" => &mut baudrate,
            "data_bits" => &mut data_bits,
            "stop_bits" => &mut stop_bits,
            "parity" => {
                if let Some(choice) = parse_choice::<Parity>(value) {
                    parity = Some(choice);
                    found += 1;
                }
                continue;
            }
            _ => continue,
        };
        if let Some(number) = parse_integer(value) {
            *slot = Some(number);
            found += 1;
        }
    }

    match (baudrate, data_bits, parity, stop_bits) {
        (Some(baudrate), Some(data_bits), Some(parity), Some(stop_bits))
            if found == SERIAL_FIELDS =>
        {
            Ok(SerialConfig {
                baudrate,
                data_bits,
                parity,
                stop_bits,
            })
        }
        _ => {
            log::debug!("Serial record incomplete: {found} of {SERIAL_FIELDS} fields valid");
            Err(Error::Parse {
                record: RecordKind::Serial,
                found,
                expected: SERIAL_FIELDS,
            })
        }
    }
}

/// Outcome of checking one required field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// The key is present and its value validates.
    Valid(String),
    /// The key is present but its value does not validate.
    Invalid(String),
    /// The key is absent.
    Missing,
}

/// Diagnostic entry for one required field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    /// Source key.
    pub key: &'static str,
    /// Shape the value is checked against.
    pub shape: FieldShape,
    /// What was found.
    pub status: FieldStatus,
}

impl FieldReport {
    /// Returns `true` if the field validated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self.status, FieldStatus::Valid(_))
    }
}

/// Required keys and shapes for `record`, in display order.
#[must_use]
pub fn required_fields(record: RecordKind) -> Vec<(&'static str, FieldShape)> {
    match record {
        RecordKind::Transport => vec![
            ("ip", FieldShape::Text),
            ("port", FieldShape::Integer),
            ("protocol", FieldShape::choice_of::<Protocol>()),
        ],
        RecordKind::Serial => vec![
            ("baudrate", FieldShape::Integer),
            ("data_bits", FieldShape::Integer),
            ("parity", FieldShape::choice_of::<Parity>()),
            ("stop_bits", FieldShape::Integer),
        ],
    }
}

/// Reports the status of every required field of `record`.
///
/// This is diagnostic only; [`parse_transport`] and [`parse_serial`] decide
/// success.
///
/// # Examples
///
/// ```
/// use commcfg::parser::{inspect, FieldStatus};
/// use commcfg::{RawConfigMap, RecordKind};
///
/// let map = RawConfigMap::parse("ip=host\nport=80x0");
/// let report = inspect(&map, RecordKind::Transport);
/// assert_eq!(report[0].status, FieldStatus::Valid("host".into()));
/// assert_eq!(report[1].status, FieldStatus::Invalid("80x0".into()));
/// assert_eq!(report[2].status, FieldStatus::Missing);
/// ```
#[must_use]
pub fn inspect(map: &RawConfigMap, record: RecordKind) -> Vec<FieldReport> {
    required_fields(record)
        .into_iter()
        .map(|(key, shape)| {
            let status = match map.get(key) {
                None => FieldStatus::Missing,
                Some(raw) if shape.accepts(raw) => FieldStatus::Valid(raw.to_string()),
                Some(raw) => FieldStatus::Invalid(raw.to_string()),
            };
            FieldReport { key, shape, status }
        })
        .collect()
}
