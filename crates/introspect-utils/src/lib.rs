//! # Introspect Utilities
//!
//! Logging and configuration helpers shared by the introspect workspace.
//!
//! The core library only emits `tracing` events; binaries call one of the
//! `init_logging*` functions here to install a subscriber.

pub mod config;
pub mod logging;

// Re-export commonly used logging functions for convenience
pub use config::LogConfig;
pub use logging::{init_logging, init_logging_with_config, init_logging_with_level, LogFormat, LogLevel, LoggingError};
pub use tracing::{debug, error, info, trace, warn};
