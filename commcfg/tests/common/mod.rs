//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for writing configuration files
//! into temporary directories.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Valid transport lines.
pub const TRANSPORT_TEXT: &str = "ip=10.0.0.1\nport=8080\nprotocol=TCP\n";

/// Valid serial lines.
pub const SERIAL_TEXT: &str = "baudrate=9600\ndata_bits=8\nparity=Even\nstop_bits=1\n";

/// A temporary directory holding one configuration file.
///
/// The directory is removed when the fixture is dropped.
pub struct ConfigFixture {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the written file.
    pub path: PathBuf,
}

impl ConfigFixture {
    /// Writes `contents` to `config.ini`.
    pub fn ini(contents: &str) -> Self {
        Self::named("config.ini", contents)
    }

    /// Writes `contents` to a file called `filename`.
    pub fn named(filename: &str, contents: impl AsRef<[u8]>) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join(filename);
        fs::write(&path, contents).expect("Failed to write config file");
        Self { temp_dir, path }
    }

    /// A path inside the fixture directory that does not exist.
    #[allow(dead_code)]
    pub fn missing(&self, filename: &str) -> PathBuf {
        self.temp_dir.path().join(filename)
    }
}

/// Full configuration with both records valid.
#[allow(dead_code)]
pub fn full_text() -> String {
    format!("{TRANSPORT_TEXT}{SERIAL_TEXT}")
}
