//! Environment-initialized logger.
//!
//! [`init_from_env`] is meant to be called exactly once at process entry; the
//! returned [`Logger`] is threaded through dependents explicitly rather than
//! stashed in a global. A malformed `LOG_LEVEL` is unrecoverable by policy:
//! the process cannot proceed with an ambiguous logging configuration, so it
//! halts with a diagnostic instead of guessing.

use crate::builder::level_filter;
use crate::encoder::{JsonFormat, TimeFormat};
use crate::logger::Logger;
use lantern_types::{Result, Severity, DEFAULT_LINE_ENDING};
use std::io;
use std::process;
use tracing::Dispatch;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Environment variable consulted for the minimum severity.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

const DEFAULT_LEVEL: &str = "info";

/// Read `LOG_LEVEL` and construct the process logger.
///
/// Absent or empty means `info`. On an unparseable level this prints a fatal
/// diagnostic to stderr and exits the process with a non-zero status.
pub fn init_from_env() -> Logger {
    let level = requested_level(std::env::var(LOG_LEVEL_ENV).ok());
    match from_level(&level) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("lantern: cannot initialize logger: {err}");
            process::exit(1);
        }
    }
}

/// Construct the stdout JSON logger for an explicit severity name.
///
/// This is the fallible core of [`init_from_env`]: records carry
/// `timestamp` (RFC3339, nanosecond precision), `severity`, and `message`
/// keys, and are pretty-printed when the severity is debug-verbose.
pub fn from_level(level: &str) -> Result<Logger> {
    let severity: Severity = level.parse()?;
    Ok(build(severity, BoxMakeWriter::new(io::stdout)))
}

fn requested_level(raw: Option<String>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_LEVEL.to_string(),
    }
}

fn json_format(severity: Severity) -> JsonFormat {
    JsonFormat {
        time_key: "timestamp",
        level_key: "severity",
        name_key: "logger",
        message_key: "message",
        time_format: TimeFormat::Rfc3339Nanos,
        lowercase_level: false,
        pretty: severity <= Severity::Debug,
        line_ending: DEFAULT_LINE_ENDING.to_string(),
    }
}

fn build(severity: Severity, writer: BoxMakeWriter) -> Logger {
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level_filter(severity))
        .event_format(json_format(severity))
        .with_writer(writer)
        .finish();
    Logger::new(Dispatch::new(subscriber))
}
