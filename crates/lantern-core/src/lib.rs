//! # Lantern Core
//!
//! Logger factories for the Lantern logging toolkit. Two independent setup
//! paths are provided:
//!
//! - **Environment-initialized**: [`init_from_env`] reads `LOG_LEVEL` once at
//!   process entry and returns a JSON-to-stdout [`Logger`] with renamed field
//!   keys and nanosecond RFC3339 timestamps.
//! - **Configuration-driven**: [`build`] turns a declarative
//!   [`LoggerConfig`] into a colorized console logger (debug mode) or a JSON
//!   logger (production mode), optionally routed through a size-bounded
//!   rotating file writer.
//!
//! Both return owned handles; callers install them process-wide or scope
//! them explicitly. Record filtering, encoding, and sink transport are
//! delegated to the `tracing` ecosystem.
//!
//! ## Example
//!
//! ```no_run
//! use lantern_core::{build, LoggerConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let config: LoggerConfig = serde_yaml::from_str("level: WARN\noutput: [stdout]")?;
//!     let logger = build(&config, false)?;
//!     logger.install()?;
//!     tracing::warn!("ready");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod encoder;
pub mod env;
pub mod logger;
pub mod sink;

// Re-export commonly used items
pub use builder::{build, Encoding};
pub use env::{from_level, init_from_env, LOG_LEVEL_ENV};
pub use logger::Logger;
pub use lantern_types::{
    FileRotationConfig, LanternError, LoggerConfig, Result, Severity, DEFAULT_LINE_ENDING,
};

/// Lantern crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
