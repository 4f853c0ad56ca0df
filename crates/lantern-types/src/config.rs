//! Declarative logger configuration.
//!
//! These structs mirror the YAML schema consumed by the configurable builder:
//!
//! ```yaml
//! level: WARN
//! encoding: json
//! output: [stdout]
//! error_output: [stderr]
//! file_logger_options:
//!   log_output: /var/log/app.log
//!   max_size: 50
//!   max_backups: 5
//!   compress: true
//! ```
//!
//! All fields are optional; empty strings and empty lists mean "use the
//! mode-appropriate default". Defaults for the rotation options are applied
//! by [`FileRotationConfig::apply_defaults`] before the writer is built, so
//! zero-valued numeric fields never reach the rotation backend.

use serde::{Deserialize, Serialize};

/// Default line ending appended to every encoded record.
pub const DEFAULT_LINE_ENDING: &str = "\n";

/// Configuration for the configurable logger builder.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum enabled severity, case-insensitive. Empty means the
    /// mode-appropriate default (DEBUG in debug mode, INFO otherwise).
    pub level: String,

    /// Line ending appended to every record. Empty means `"\n"`.
    pub line_ending: String,

    /// Encoding name, one of `"json"` or `"console"`. Empty means the
    /// mode-appropriate default.
    pub encoding: String,

    /// Sink identifiers to write records to: `stdout`, `stderr`, or file
    /// paths. Empty means stderr.
    pub output: Vec<String>,

    /// Sink identifiers for the logger's own diagnostics. Empty means
    /// stderr.
    pub error_output: Vec<String>,

    /// Rotating-file options. When present, records are routed through the
    /// rotating file writer and `output` is bypassed entirely.
    #[serde(rename = "file_logger_options", skip_serializing_if = "Option::is_none")]
    pub file_logger: Option<FileRotationConfig>,
}

/// Options for the size-bounded rotating file writer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FileRotationConfig {
    /// File to write logs to. Rotated files are retained alongside it.
    /// Empty means `<process-name>-rotate.log` in the system temp directory.
    pub log_output: String,

    /// Maximum size in megabytes of the log file before it gets rotated.
    /// Zero means 100 megabytes.
    pub max_size: u64,

    /// Maximum age in days of retired log files. Zero means 24. Retention is
    /// enforced by `max_backups`; this value is carried through the schema
    /// for operators but not acted on by the rotation backend.
    pub max_age: u64,

    /// Maximum number of retired log files to keep. Zero means 10.
    pub max_backups: usize,

    /// Whether retired log files are gzip-compressed. Defaults to false.
    pub compress: bool,
}

impl FileRotationConfig {
    /// Replace zero-valued fields with their documented defaults.
    pub fn apply_defaults(&mut self) {
        if self.log_output.is_empty() {
            self.log_output = default_log_path();
        }

        if self.max_size == 0 {
            self.max_size = 100;
        }

        if self.max_age == 0 {
            self.max_age = 24;
        }

        if self.max_backups == 0 {
            self.max_backups = 10;
        }
    }
}

/// Per-process default rotation target in the system temp directory.
fn default_log_path() -> String {
    let stem = std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "lantern".to_string());

    std::env::temp_dir()
        .join(format!("{stem}-rotate.log"))
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_defaults() {
        let mut options = FileRotationConfig::default();
        options.apply_defaults();

        assert!(!options.log_output.is_empty());
        assert!(options.log_output.ends_with("-rotate.log"));
        assert_eq!(options.max_size, 100);
        assert_eq!(options.max_age, 24);
        assert_eq!(options.max_backups, 10);
        assert!(!options.compress);
    }

    #[test]
    fn test_rotation_defaults_keep_explicit_values() {
        let mut options = FileRotationConfig {
            log_output: "/var/log/app.log".to_string(),
            max_size: 5,
            max_age: 7,
            max_backups: 2,
            compress: true,
        };
        let expected = options.clone();
        options.apply_defaults();

        assert_eq!(options, expected);
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
level: warn
encoding: console
output: [stdout, /tmp/app.log]
error_output: [stderr]
file_logger_options:
  log_output: /tmp/rotated.log
  max_size: 50
  compress: true
"#;

        let config: LoggerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.level, "warn");
        assert_eq!(config.encoding, "console");
        assert_eq!(config.output, vec!["stdout", "/tmp/app.log"]);
        assert_eq!(config.error_output, vec!["stderr"]);

        let file_logger = config.file_logger.unwrap();
        assert_eq!(file_logger.log_output, "/tmp/rotated.log");
        assert_eq!(file_logger.max_size, 50);
        assert_eq!(file_logger.max_age, 0);
        assert!(file_logger.compress);
    }

    #[test]
    fn test_config_empty_document() {
        let config: LoggerConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.level.is_empty());
        assert!(config.line_ending.is_empty());
        assert!(config.encoding.is_empty());
        assert!(config.output.is_empty());
        assert!(config.error_output.is_empty());
        assert!(config.file_logger.is_none());
    }
}
