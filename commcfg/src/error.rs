//! Error types for the commcfg library.
//!
//! Every failure is reported through [`Error`], which carries enough context
//! for a readable message. Callers that only need the coarse taxonomy use
//! [`Error::kind`] and the payload-free [`ErrorKind`].

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordKind;

/// Result type alias for operations that may fail with a commcfg error.
///
/// # Examples
///
/// ```
/// use commcfg::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(9600)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the commcfg library.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration source could not be opened or read.
    #[error("failed to open configuration file {}: {source}", path.display())]
    FileOpenFailed {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration source is not in a supported format.
    #[error("unsupported configuration format: {}", path.display())]
    InvalidFormat {
        /// The path whose format was rejected.
        path: PathBuf,
    },

    /// A record could not be assembled because a required field was missing
    /// or held an invalid value.
    #[error("invalid {record} configuration: {found} of {expected} required fields are valid")]
    Parse {
        /// The record that failed.
        record: RecordKind,
        /// Number of required fields that validated.
        found: usize,
        /// Number of required fields for the record.
        expected: usize,
    },

    /// A configuration query was made with no parser bound.
    #[error("no configuration parser is bound")]
    NoParser,

    /// Records could not be rendered in the requested output format.
    #[error("output error: {message}")]
    Output {
        /// A description of the failure.
        message: String,
    },
}

impl Error {
    /// Returns the coarse kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use commcfg::{Error, ErrorKind};
    ///
    /// assert_eq!(Error::NoParser.kind(), ErrorKind::Unknown);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileOpenFailed { .. } => ErrorKind::FileOpenFailed,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::Parse { .. } => ErrorKind::ParseError,
            Self::NoParser | Self::Output { .. } => ErrorKind::Unknown,
        }
    }
}

/// Payload-free classification of failures.
///
/// The discriminants are stable and double as numeric error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source could not be opened or read.
    FileOpenFailed = 0,
    /// The source type is not supported.
    InvalidFormat = 1,
    /// A required field was missing or failed validation.
    ParseError = 2,
    /// No parser was bound, or an unmapped internal failure occurred.
    Unknown = 3,
}

/// Label used for numeric codes that do not name an [`ErrorKind`].
pub const UNRECOGNIZED_LABEL: &str = "UNRECOGNIZED_ERROR";

impl ErrorKind {
    /// All kinds in code order.
    pub const ALL: [Self; 4] = [
        Self::FileOpenFailed,
        Self::InvalidFormat,
        Self::ParseError,
        Self::Unknown,
    ];

    /// Returns the symbolic label for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use commcfg::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::ParseError.label(), "PARSE_ERROR");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FileOpenFailed => "FILE_OPEN_FAILED",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ParseError => "PARSE_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Returns the numeric code for this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its numeric code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders a numeric error code as its label.
///
/// Codes that do not correspond to an [`ErrorKind`] render as
/// [`UNRECOGNIZED_LABEL`].
///
/// # Examples
///
/// ```
/// use commcfg::error::label_for_code;
///
/// assert_eq!(label_for_code(0), "FILE_OPEN_FAILED");
/// assert_eq!(label_for_code(42), "UNRECOGNIZED_ERROR");
/// ```
#[must_use]
pub fn label_for_code(code: u8) -> &'static str {
    ErrorKind::from_code(code).map_or(UNRECOGNIZED_LABEL, ErrorKind::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_failed_error() {
        let err = Error::FileOpenFailed {
            path: PathBuf::from("/missing/config.ini"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let display = format!("{err}");
        assert!(display.contains("failed to open"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/missing/config.ini"));
        assert_eq!(err.kind(), ErrorKind::FileOpenFailed);
    }

    #[test]
    fn test_file_open_failed_keeps_source() {
        use std::error::Error as _;

        let err = Error::FileOpenFailed {
            path: PathBuf::from("config.ini"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_format_error() {
        let err = Error::InvalidFormat {
            path: PathBuf::from("settings.json"),
        };
        let display = format!("{err}");
        assert!(display.contains("unsupported"));
        assert!(display.contains("settings.json"));
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_parse_error() {
        let err = Error::Parse {
            record: RecordKind::Transport,
            found: 2,
            expected: 3,
        };
        let display = format!("{err}");
        assert!(display.contains("transport"));
        assert!(display.contains("2 of 3"));
        assert_eq!(err.kind(), ErrorKind::ParseError);
    }

    #[test]
    fn test_unknown_kinds() {
        assert_eq!(Error::NoParser.kind(), ErrorKind::Unknown);
        let err = Error::Output {
            message: "broken".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(format!("{err}").contains("broken"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ErrorKind::FileOpenFailed.label(), "FILE_OPEN_FAILED");
        assert_eq!(ErrorKind::InvalidFormat.label(), "INVALID_FORMAT");
        assert_eq!(ErrorKind::ParseError.label(), "PARSE_ERROR");
        assert_eq!(ErrorKind::Unknown.label(), "UNKNOWN_ERROR");
        assert_eq!(format!("{}", ErrorKind::ParseError), "PARSE_ERROR");
    }

    #[test]
    fn test_codes_round_trip() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
            assert_eq!(label_for_code(kind.code()), kind.label());
        }
    }

    #[test]
    fn test_unrecognized_code() {
        assert_eq!(ErrorKind::from_code(4), None);
        assert_eq!(label_for_code(4), UNRECOGNIZED_LABEL);
        assert_eq!(label_for_code(u8::MAX), "UNRECOGNIZED_ERROR");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::NoParser)
        }

        assert!(returns_result().is_err());
    }
}
