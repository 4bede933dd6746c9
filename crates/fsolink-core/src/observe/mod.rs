//! # Observability
//!
//! Structured logging for binaries and demos built on this crate. The
//! calculation modules only emit `tracing` events; installing a subscriber
//! is the embedding application's call, made through [`init_logging`].
//!
//! ```rust,ignore
//! use fsolink_core::observe::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default());
//!
//! tracing::info!("link budget service started");
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
