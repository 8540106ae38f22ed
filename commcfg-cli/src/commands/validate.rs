//! Command to check every required field of a configuration file.

use crate::error::CliError;
use crate::utils::{open_ini, write_stdout, GlobalOptions};
use clap::Args;
use commcfg::parser::{inspect, FieldReport, FieldStatus};
use commcfg::{ConfigParser, RecordKind};

/// Report the status of every required field.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let parser = open_ini(global)?;

        let mut lines = Vec::new();
        for record in [RecordKind::Transport, RecordKind::Serial] {
            lines.push(format!("[{record}]"));
            lines.extend(inspect(parser.entries(), record).iter().map(report_line));
        }

        // Outcomes come from the record parsers, never from the report.
        let transport = parser.parse_transport();
        let serial = parser.parse_serial();
        lines.push(format!("transport: {}", verdict(transport.is_ok())));
        lines.push(format!("serial: {}", verdict(serial.is_ok())));
        write_stdout(&lines.join("\n"))?;

        transport?;
        serial?;
        Ok(())
    }
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "valid"
    } else {
        "invalid"
    }
}

fn report_line(report: &FieldReport) -> String {
    let status = match &report.status {
        FieldStatus::Valid(raw) => format!("ok ({raw})"),
        FieldStatus::Invalid(raw) => {
            format!("invalid ({raw:?}, expected {})", report.shape.describe())
        }
        FieldStatus::Missing => format!("missing (expected {})", report.shape.describe()),
    };
    format!("  {}: {status}", report.key)
}
