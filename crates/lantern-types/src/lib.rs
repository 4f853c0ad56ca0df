//! # Lantern Types
//!
//! Core types shared across the Lantern logging crates:
//!
//! - [`Severity`]: the ordered log-level enumeration with case-insensitive
//!   parsing
//! - [`LoggerConfig`] and [`FileRotationConfig`]: the declarative
//!   configuration schema consumed by the builder
//! - [`LanternError`] and [`Result`]: error types and result alias
//!
//! This crate carries no logging-backend dependency; the factories that turn
//! these types into logger instances live in `lantern-core`.
//!
//! ## Example
//!
//! ```
//! use lantern_types::Severity;
//!
//! let severity: Severity = "warning".parse().unwrap();
//! assert_eq!(severity, Severity::Warn);
//! assert!(Severity::Debug < severity);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod errors;
pub mod severity;

// Re-export common types for convenience
pub use config::{FileRotationConfig, LoggerConfig, DEFAULT_LINE_ENDING};
pub use errors::{LanternError, Result};
pub use severity::Severity;
