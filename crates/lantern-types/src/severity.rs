//! Severity levels for the logging system.

use crate::errors::{LanternError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity enumeration, totally ordered from most to least verbose.
///
/// A logger emits only records at or above its configured minimum severity.
/// `Panic` and `Fatal` exist so that configuration and colorization can
/// distinguish them; filtering collapses them onto the error tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Verbose diagnostic messages
    Debug,
    /// Informational messages
    Info,
    /// Warnings that do not interrupt operation
    Warn,
    /// Error messages
    Error,
    /// Unrecoverable errors that unwind the current operation
    Panic,
    /// Unrecoverable errors that terminate the process
    Fatal,
}

impl Severity {
    /// Lowercase severity name, as used by the production JSON encoding.
    pub fn lowercase_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Panic => "panic",
            Severity::Fatal => "fatal",
        }
    }
}

impl FromStr for Severity {
    type Err = LanternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "PANIC" => Ok(Severity::Panic),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(LanternError::Level(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Info => write!(f, "INFO"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Panic => write!(f, "PANIC"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_severity_parsing() {
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("eRrOr".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("panic".parse::<Severity>().unwrap(), Severity::Panic);
        assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Fatal);

        assert!("".parse::<Severity>().is_err());
        assert!("verbose".parse::<Severity>().is_err());
        assert!("info ".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Panic);
        assert!(Severity::Panic < Severity::Fatal);
    }

    #[test]
    fn test_severity_display_round_trip() {
        for severity in [
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Panic,
            Severity::Fatal,
        ] {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
            assert_eq!(severity.to_string().to_lowercase(), severity.lowercase_str());
        }
    }

    proptest! {
        #[test]
        fn parse_accepts_any_case(name in "(?i)(debug|info|warn|warning|error|panic|fatal)") {
            prop_assert!(name.parse::<Severity>().is_ok());
        }
    }
}
