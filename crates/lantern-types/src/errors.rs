//! Error types for Lantern operations.

use thiserror::Error;

/// The main error type for Lantern operations.
///
/// Covers configuration parsing, severity resolution, and sink construction
/// failures. Backend construction errors are surfaced through these variants
/// rather than panicking.
#[derive(Error, Debug)]
pub enum LanternError {
    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown severity name
    #[error("Invalid log level: {0}")]
    Level(String),

    /// Unknown encoding name
    #[error("Unknown encoding: {0}")]
    Encoding(String),

    /// Sink resolution or open failure
    #[error("Sink error: {0}")]
    Sink(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for Lantern operations.
pub type Result<T> = std::result::Result<T, LanternError>;

/// Helper macro to bail out with a LanternError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if outputs.is_empty() {
///     bail!(Sink, "no output sinks configured");
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::LanternError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::LanternError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::LanternError::Config($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::LanternError::Config(format!($fmt, $($arg)*)))
    };
}
