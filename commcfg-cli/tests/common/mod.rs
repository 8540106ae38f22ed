//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that point at a fixture file
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Transport settings from the usual plant example.
pub const TRANSPORT: &str = "ip=10.0.0.1\nport=8080\nprotocol=TCP\n";

/// Serial settings from the usual plant example.
pub const SERIAL: &str = "baudrate=9600\ndata_bits=8\nparity=Even\nstop_bits=1\n";

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The working directory is the test environment, and the environment
    /// variables the CLI reads are cleared so the host cannot leak in.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("commcfg").expect("Failed to find commcfg binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("COMMCFG_CONFIG")
            .env_remove("COMMCFG_OUTPUT_FORMAT")
            .env_remove("COMMCFG_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--config` pointing at `file`.
    pub fn command(&self, file: &Path) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(file);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file into the environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a `config.ini` holding both valid records.
    pub fn write_full_config(&self) -> PathBuf {
        self.write_file("config.ini", &format!("{TRANSPORT}{SERIAL}"))
    }
}
