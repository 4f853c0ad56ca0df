//! Output sink resolution.
//!
//! Sink identifiers are stream names (`stdout`, `stderr`) or file paths.
//! Multiple sinks are teed into a single writer factory. The rotating file
//! writer is built here as well; rotation and retention are owned by the
//! rotation backend, this module only translates the configuration.

use file_rotate::compression::Compression;
use file_rotate::suffix::{AppendTimestamp, FileLimit};
use file_rotate::{ContentLimit, FileRotate};
use lantern_types::{bail, FileRotationConfig, LanternError, Result};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Sink identifier for standard output.
pub const STDOUT: &str = "stdout";

/// Sink identifier for standard error.
pub const STDERR: &str = "stderr";

/// Resolve one sink identifier into a writer factory.
///
/// File sinks are opened append/create here, so unwritable paths surface as
/// build-time errors rather than lost records.
fn resolve_sink(target: &str) -> Result<BoxMakeWriter> {
    match target {
        STDOUT => Ok(BoxMakeWriter::new(io::stdout)),
        STDERR => Ok(BoxMakeWriter::new(io::stderr)),
        path => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LanternError::Sink(format!("cannot open {path}: {e}")))?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
    }
}

/// Resolve a sink list into a single, possibly teed, writer factory.
pub fn resolve_sinks(targets: &[String]) -> Result<BoxMakeWriter> {
    let mut iter = targets.iter();
    let first = match iter.next() {
        Some(target) => target,
        None => bail!(Sink, "no sinks configured"),
    };

    let mut writer = resolve_sink(first)?;
    for target in iter {
        writer = BoxMakeWriter::new(writer.and(resolve_sink(target)?));
    }
    Ok(writer)
}

/// Construct the size-bounded rotating file writer from resolved options.
///
/// The writer is wrapped in a [`Mutex`] so concurrent emitters serialize on
/// it; the rotation backend handles rollover and retained-file pruning. Call
/// [`FileRotationConfig::apply_defaults`] first.
pub fn rotating_writer(options: &FileRotationConfig) -> Mutex<FileRotate<AppendTimestamp>> {
    let suffix = AppendTimestamp::default(FileLimit::MaxFiles(options.max_backups));
    let content_limit = ContentLimit::Bytes(options.max_size as usize * 1024 * 1024);
    let compression = if options.compress {
        Compression::OnRotate(0)
    } else {
        Compression::None
    };

    #[cfg(unix)]
    let writer = FileRotate::new(&options.log_output, suffix, content_limit, compression, None);
    #[cfg(not(unix))]
    let writer = FileRotate::new(&options.log_output, suffix, content_limit, compression);

    Mutex::new(writer)
}
