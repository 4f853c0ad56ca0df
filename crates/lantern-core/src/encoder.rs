//! Record encoders and the coloring callbacks they use.
//!
//! Two event formats are provided: [`JsonFormat`], a JSON encoder with
//! configurable field keys and timestamp representation, and
//! [`ConsoleFormat`], a tab-separated human-readable encoder with colorized
//! level and name columns. Both append a configurable line ending.

use chrono::{SecondsFormat, Utc};
use colored::{Color, Colorize};
use lantern_types::Severity;
use serde_json::{Map, Value};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Minimum rendered width of the logger-name column, in characters.
const NAME_WIDTH: usize = 12;

/// Map a backend level onto its severity tier.
///
/// The backend has no panic or fatal tiers, so those severities never come
/// back out of it; trace collapses onto debug.
pub fn severity_of(level: &Level) -> Severity {
    if *level == Level::ERROR {
        Severity::Error
    } else if *level == Level::WARN {
        Severity::Warn
    } else if *level == Level::INFO {
        Severity::Info
    } else {
        Severity::Debug
    }
}

/// Fixed severity-to-color table for console output.
///
/// New severities require exactly one new row here.
pub fn level_color(severity: Severity) -> Color {
    match severity {
        Severity::Debug => Color::BrightWhite,
        Severity::Info => Color::BrightCyan,
        Severity::Warn => Color::BrightYellow,
        Severity::Error => Color::BrightRed,
        Severity::Panic | Severity::Fatal => Color::BrightMagenta,
    }
}

/// Level encoder callback: the capitalized severity name in its fixed color.
pub fn colored_level(severity: Severity) -> String {
    severity
        .to_string()
        .color(level_color(severity))
        .to_string()
}

/// Pad a logger name to the fixed column width. Longer names pass through
/// untouched.
fn pad_name(name: &str) -> String {
    if name.len() < NAME_WIDTH {
        format!("{name:<NAME_WIDTH$}")
    } else {
        name.to_string()
    }
}

/// Name encoder callback: the width-padded logger name in bright green.
pub fn colored_name(name: &str) -> String {
    pad_name(name).color(Color::BrightGreen).to_string()
}

/// Timestamp representations supported by [`JsonFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// RFC3339 with nanosecond precision, e.g. `2026-08-25T12:00:00.123456789Z`
    Rfc3339Nanos,
    /// Fractional seconds since the Unix epoch, e.g. `1787486400.123456`
    EpochSeconds,
}

/// JSON event encoder with configurable field keys.
///
/// Event fields are collected into the record as-is; the `message` field is
/// renamed to [`JsonFormat::message_key`]. The event target is emitted under
/// [`JsonFormat::name_key`].
#[derive(Debug, Clone)]
pub struct JsonFormat {
    /// Key under which the timestamp is emitted.
    pub time_key: &'static str,
    /// Key under which the severity name is emitted.
    pub level_key: &'static str,
    /// Key under which the event target is emitted.
    pub name_key: &'static str,
    /// Key under which the event message is emitted.
    pub message_key: &'static str,
    /// Timestamp representation.
    pub time_format: TimeFormat,
    /// Emit the severity name in lowercase instead of uppercase.
    pub lowercase_level: bool,
    /// Pretty-print each record across multiple lines.
    pub pretty: bool,
    /// Line ending appended to every record.
    pub line_ending: String,
}

impl JsonFormat {
    fn timestamp(&self) -> Value {
        let now = Utc::now();
        match self.time_format {
            TimeFormat::Rfc3339Nanos => {
                Value::from(now.to_rfc3339_opts(SecondsFormat::Nanos, true))
            }
            TimeFormat::EpochSeconds => {
                Value::from(now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / 1e9)
            }
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let severity = severity_of(event.metadata().level());

        let mut record = Map::new();
        record.insert(self.time_key.to_string(), self.timestamp());
        let level = if self.lowercase_level {
            severity.lowercase_str().to_string()
        } else {
            severity.to_string()
        };
        record.insert(self.level_key.to_string(), Value::from(level));
        record.insert(
            self.name_key.to_string(),
            Value::from(event.metadata().target()),
        );

        let mut fields = Map::new();
        event.record(&mut JsonVisitor {
            fields: &mut fields,
        });
        if let Some(message) = fields.remove("message") {
            record.insert(self.message_key.to_string(), message);
        }
        for (key, value) in fields {
            record.insert(key, value);
        }

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&record)
        } else {
            serde_json::to_string(&record)
        }
        .map_err(|_| fmt::Error)?;

        write!(writer, "{}{}", rendered, self.line_ending)
    }
}

/// Collects event fields into a JSON map.
struct JsonVisitor<'a> {
    fields: &'a mut Map<String, Value>,
}

impl Visit for JsonVisitor<'_> {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields
            .insert(field.name().to_string(), Value::from(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), Value::from(format!("{value:?}")));
    }
}

/// Tab-separated console encoder: timestamp, colorized level, colorized
/// padded name, then the event message and fields.
#[derive(Debug, Clone)]
pub struct ConsoleFormat {
    /// Line ending appended to every record.
    pub line_ending: String,
}

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let severity = severity_of(meta.level());

        write!(
            writer,
            "{}\t{}\t{}\t",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            colored_level(severity),
            colored_name(meta.target()),
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        write!(writer, "{}", self.line_ending)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_color_table() {
        assert_eq!(level_color(Severity::Debug), Color::BrightWhite);
        assert_eq!(level_color(Severity::Info), Color::BrightCyan);
        assert_eq!(level_color(Severity::Warn), Color::BrightYellow);
        assert_eq!(level_color(Severity::Error), Color::BrightRed);
        assert_eq!(level_color(Severity::Panic), Color::BrightMagenta);
        assert_eq!(level_color(Severity::Fatal), Color::BrightMagenta);
    }

    #[test]
    fn test_name_padding() {
        assert_eq!(pad_name("proxy"), "proxy       ");
        assert_eq!(pad_name("proxy").len(), 12);
        assert_eq!(pad_name(""), " ".repeat(12));
        assert_eq!(pad_name("twelve-chars"), "twelve-chars");
        assert_eq!(pad_name("fourteen-chars"), "fourteen-chars");
    }

    #[test]
    fn test_colored_name_contains_padded_name() {
        let rendered = colored_name("rpc");
        assert!(rendered.contains("rpc"));
    }

    #[test]
    fn test_severity_of_levels() {
        assert_eq!(severity_of(&Level::TRACE), Severity::Debug);
        assert_eq!(severity_of(&Level::DEBUG), Severity::Debug);
        assert_eq!(severity_of(&Level::INFO), Severity::Info);
        assert_eq!(severity_of(&Level::WARN), Severity::Warn);
        assert_eq!(severity_of(&Level::ERROR), Severity::Error);
    }

    #[test]
    fn test_json_format_record_shape() {
        use super::testing::CaptureWriter;
        use lantern_types::DEFAULT_LINE_ENDING;

        let writer = CaptureWriter::default();
        let format = JsonFormat {
            time_key: "ts",
            level_key: "level",
            name_key: "logger",
            message_key: "msg",
            time_format: TimeFormat::EpochSeconds,
            lowercase_level: true,
            pretty: false,
            line_ending: DEFAULT_LINE_ENDING.to_string(),
        };

        let subscriber = tracing_subscriber::fmt::Subscriber::builder()
            .with_max_level(tracing::level_filters::LevelFilter::INFO)
            .event_format(format)
            .with_writer(writer.clone())
            .finish();

        tracing::dispatcher::with_default(&tracing::Dispatch::new(subscriber), || {
            tracing::info!(attempt = 3u64, "retrying upstream");
        });

        let output = writer.contents();
        let record: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(record["level"], "info");
        assert_eq!(record["msg"], "retrying upstream");
        assert_eq!(record["attempt"], 3);
        assert!(record["ts"].is_number());
        assert!(record["logger"].as_str().unwrap().contains("encoder"));
    }
}
