//! Output formatter implementations.

use crate::record::{SerialConfig, TransportConfig};
use crate::validate::Choice;
use crate::{Error, Result};

use super::{OutputFormatter, Records};

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, records: &Records) -> Result<String> {
        serde_json::to_string_pretty(records).map_err(|e| Error::Output {
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, records: &Records) -> Result<String> {
        let yaml = serde_yaml::to_string(records).map_err(|e| Error::Output {
            message: format!("failed to serialize to YAML: {e}"),
        })?;
        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for `key=value` source lines.
pub struct IniFormatter;

impl IniFormatter {
    fn transport_lines(config: &TransportConfig) -> [String; 3] {
        [
            format!("ip={}", config.ip),
            format!("port={}", config.port),
            format!("protocol={}", config.protocol.as_str()),
        ]
    }

    fn serial_lines(config: &SerialConfig) -> [String; 4] {
        [
            format!("baudrate={}", config.baudrate),
            format!("data_bits={}", config.data_bits),
            format!("parity={}", config.parity.as_str()),
            format!("stop_bits={}", config.stop_bits),
        ]
    }
}

impl OutputFormatter for IniFormatter {
    fn format(&self, records: &Records) -> Result<String> {
        let mut lines = Vec::new();
        if let Some(ref transport) = records.transport {
            lines.extend(Self::transport_lines(transport));
        }
        if let Some(ref serial) = records.serial {
            lines.extend(Self::serial_lines(serial));
        }
        Ok(lines.join("\n"))
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, records: &Records) -> Result<String> {
        if records.is_empty() {
            return Ok("No configuration records.".to_string());
        }

        let mut lines = Vec::new();
        if let Some(ref t) = records.transport {
            lines.push(format!(
                "[TCP] IP: {} | Port: {} | Protocol: {}",
                t.ip, t.port, t.protocol
            ));
        }
        if let Some(ref s) = records.serial {
            lines.push(format!(
                "[UART] Baudrate: {} | Parity: {} | Data Bits: {} | Stop Bits: {}",
                s.baudrate, s.parity, s.data_bits, s.stop_bits
            ));
        }
        Ok(lines.join("\n"))
    }
}
