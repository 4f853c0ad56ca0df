//! Configurable logger construction.
//!
//! [`build`] turns a declarative [`LoggerConfig`] into a [`Logger`]. Debug
//! mode selects a colorized console template; production mode selects a JSON
//! template. A file-rotation section reroutes all records through the
//! rotating file writer.

use crate::encoder::{ConsoleFormat, JsonFormat, TimeFormat};
use crate::logger::Logger;
use crate::sink;
use lantern_types::{LoggerConfig, Result, Severity, DEFAULT_LINE_ENDING};
use std::io::Write;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

/// Output encodings understood by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One JSON object per record
    Json,
    /// Tab-separated, colorized human-readable lines
    Console,
}

impl FromStr for Encoding {
    type Err = lantern_types::LanternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Encoding::Json),
            "console" => Ok(Encoding::Console),
            other => Err(lantern_types::LanternError::Encoding(other.to_string())),
        }
    }
}

/// Map a severity onto the backend's filter tier.
///
/// Panic and fatal collapse onto the error tier; the backend has nothing
/// above it.
pub(crate) fn level_filter(severity: Severity) -> LevelFilter {
    match severity {
        Severity::Debug => LevelFilter::DEBUG,
        Severity::Info => LevelFilter::INFO,
        Severity::Warn => LevelFilter::WARN,
        Severity::Error | Severity::Panic | Severity::Fatal => LevelFilter::ERROR,
    }
}

/// A fully resolved logger template, after mode selection and config
/// overrides.
#[derive(Debug)]
struct Template {
    severity: Severity,
    encoding: Encoding,
    line_ending: String,
    output: Vec<String>,
    error_output: Vec<String>,
}

impl Template {
    fn for_mode(debug: bool, line_ending: String) -> Self {
        Self {
            severity: if debug { Severity::Debug } else { Severity::Info },
            encoding: if debug { Encoding::Console } else { Encoding::Json },
            line_ending,
            output: vec![sink::STDERR.to_string()],
            error_output: vec![sink::STDERR.to_string()],
        }
    }
}

/// Production JSON encoder settings: epoch-seconds timestamps and lowercase
/// level names.
fn production_json(line_ending: &str) -> JsonFormat {
    JsonFormat {
        time_key: "ts",
        level_key: "level",
        name_key: "logger",
        message_key: "msg",
        time_format: TimeFormat::EpochSeconds,
        lowercase_level: true,
        pretty: false,
        line_ending: line_ending.to_string(),
    }
}

/// Build a logger from a declarative configuration.
///
/// In debug mode the minimum severity is pinned to DEBUG and the console
/// template is used. Otherwise the configured level applies when it parses;
/// an unparseable level keeps the template default (INFO) rather than
/// failing, and a note is written to the resolved error sinks. Unknown
/// encodings and unopenable sinks are build errors.
///
/// When `file_logger_options` is present, records are routed through the
/// rotating file writer exclusively; the configured `output` sinks are
/// bypassed.
pub fn build(config: &LoggerConfig, debug: bool) -> Result<Logger> {
    let line_ending = if config.line_ending.is_empty() {
        DEFAULT_LINE_ENDING.to_string()
    } else {
        config.line_ending.clone()
    };

    let mut template = Template::for_mode(debug, line_ending);

    // Debug mode pins DEBUG; otherwise the config wins when it parses, and
    // an unparseable level keeps the template default.
    let mut level_note = None;
    if !debug && !config.level.is_empty() {
        match config.level.parse::<Severity>() {
            Ok(severity) => template.severity = severity,
            Err(err) => level_note = Some(format!("{err}; keeping {}", template.severity)),
        }
    }

    if !config.encoding.is_empty() {
        template.encoding = config.encoding.parse()?;
    }

    if !config.output.is_empty() {
        template.output = config.output.clone();
    }
    if !config.error_output.is_empty() {
        template.error_output = config.error_output.clone();
    }

    // Error sinks carry the builder's own diagnostics and are opened up
    // front, so a broken error sink fails the build like any other sink.
    let error_writer = sink::resolve_sinks(&template.error_output)?;
    if let Some(note) = level_note {
        let mut writer = error_writer.make_writer();
        let _ = writeln!(writer, "lantern: {note}");
    }

    // A file-rotation section replaces the configured output sinks
    // wholesale; records go through the JSON pipeline into the rotating
    // writer.
    if let Some(options) = &config.file_logger {
        let mut options = options.clone();
        options.apply_defaults();

        let subscriber = tracing_subscriber::fmt::Subscriber::builder()
            .with_max_level(level_filter(template.severity))
            .event_format(production_json(&template.line_ending))
            .with_writer(sink::rotating_writer(&options))
            .finish();
        return Ok(Logger::new(Dispatch::new(subscriber)));
    }

    let writer = sink::resolve_sinks(&template.output)?;
    let dispatch = match template.encoding {
        Encoding::Json => {
            let subscriber = tracing_subscriber::fmt::Subscriber::builder()
                .with_max_level(level_filter(template.severity))
                .event_format(production_json(&template.line_ending))
                .with_writer(writer)
                .finish();
            Dispatch::new(subscriber)
        }
        Encoding::Console => {
            let subscriber = tracing_subscriber::fmt::Subscriber::builder()
                .with_max_level(level_filter(template.severity))
                .event_format(ConsoleFormat {
                    line_ending: template.line_ending.clone(),
                })
                .with_writer(writer)
                .finish();
            Dispatch::new(subscriber)
        }
    };

    Ok(Logger::new(dispatch))
}
