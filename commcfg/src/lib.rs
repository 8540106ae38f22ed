#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # commcfg
//!
//! A library for loading validated transport and serial settings from
//! `key=value` configuration files.
//!
//! Loading is strict and all-or-nothing: a record is returned only when every
//! one of its required fields is present and valid.
//!
//! ## Core Types
//!
//! - [`RawConfigMap`]: raw key-value pairs read from a source
//! - [`TransportConfig`] and [`SerialConfig`]: the typed records
//! - [`ConfigParser`] and [`IniParser`]: format-specific record parsers
//! - [`ConfigurationManager`]: facade over the bound parser
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use commcfg::{ConfigurationManager, IniParser, Parity, RawConfigMap};
//!
//! let entries = RawConfigMap::parse(
//!     "baudrate=9600\ndata_bits=8\nparity=Even\nstop_bits=1\n",
//! );
//! let manager = ConfigurationManager::new(Box::new(IniParser::from_map(entries)));
//!
//! let serial = manager.serial_config().unwrap();
//! assert_eq!(serial.baudrate, 9600);
//! assert_eq!(serial.parity, Parity::Even);
//!
//! // The transport keys are absent, so that record fails on its own.
//! assert!(manager.transport_config().is_err());
//! ```

pub mod error;
pub mod factory;
pub mod logging;
pub mod manager;
pub mod output;
pub mod parser;
pub mod record;
pub mod store;
pub mod validate;

// Re-export key types at crate root for convenience
pub use error::{Error, ErrorKind, Result};
pub use factory::{create_parser, select_format};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::ConfigurationManager;
pub use parser::{ConfigFormat, ConfigParser, IniParser};
pub use record::{Parity, Protocol, RecordKind, SerialConfig, TransportConfig};
pub use store::RawConfigMap;
