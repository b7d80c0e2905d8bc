//! # Logging Utilities
//!
//! Logging infrastructure for introspect using `tracing`.
//!
//! This module provides structured logging with support for:
//! - Pretty (development) and JSON (production) output
//! - Environment variable configuration
//! - Optional daily-rolled file output
//!
//! Console output goes to stderr so that command output on stdout stays
//! machine-readable.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use introspect_utils::init_logging;
//!
//! // Initialize with default settings (reads from RUST_LOG env var)
//! init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=introspect_core=trace`)
//! - `INTROSPECT_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `INTROSPECT_LOG_FILE`: Optional path to log file (if not set, logs only to console)

use std::{fs, io};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::LogConfig;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default for development)
    #[default]
    Pretty,
    /// JSON format (default for production)
    Json,
}

impl FromStr for LogFormat
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            )),
        }
    }
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables, see [`LogConfig::from_env`].
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - `RUST_LOG` holds an invalid filter directive
pub fn init_logging() -> Result<(), LoggingError>
{
    init_logging_with_config(&LogConfig::from_env()).map(drop)
}

/// Initialize logging with explicit level and format
///
/// `RUST_LOG` is ignored; the log file, if any, still comes from
/// `INTROSPECT_LOG_FILE`.
///
/// ## Example
///
/// ```rust,no_run
/// use introspect_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<(), LoggingError>
{
    init_logging_with_config(&LogConfig::from_env().with_level(level).with_format(format)).map(drop)
}

/// Initialize logging from a resolved [`LogConfig`]
///
/// Returns the file receiving today's lines when file output is configured.
///
/// ## Errors
///
/// Returns an error if the filter directive is invalid or a global subscriber
/// is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<Option<PathBuf>, LoggingError>
{
    let env_filter = EnvFilter::try_new(&config.filter)
        .map_err(|err| LoggingError::InvalidLevel(format!("{}: {err}", config.filter)))?;

    match config.format {
        LogFormat::Pretty => {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(env_filter.clone());

            if let Some(file_path) = &config.file {
                let file_layer = fmt::layer()
                    .with_writer(file_writer(config, file_path)?)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false) // No ANSI in files
                    .with_filter(env_filter);

                Registry::default().with(console_layer).with(file_layer).try_init()?;
            } else {
                Registry::default().with(console_layer).try_init()?;
            }
        }
        LogFormat::Json => {
            let console_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(io::stderr)
                .with_filter(env_filter.clone());

            if let Some(file_path) = &config.file {
                let file_layer = fmt::layer()
                    .json()
                    .with_writer(file_writer(config, file_path)?)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(env_filter);

                Registry::default().with(console_layer).with(file_layer).try_init()?;
            } else {
                Registry::default().with(console_layer).try_init()?;
            }
        }
    }

    Ok(config.current_file())
}

/// Non-blocking daily-rolled writer for the configured file, creating its
/// directory.
///
/// The worker guard is leaked so buffered lines are flushed for the lifetime
/// of the process.
fn file_writer(config: &LogConfig, path: &Path) -> Result<tracing_appender::non_blocking::NonBlocking, LoggingError>
{
    let directory = config.log_directory().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&directory)?;

    let file_name = path.file_name().unwrap_or_default();
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    std::mem::forget(guard);
    Ok(non_blocking)
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log level or filter directive
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}

impl From<tracing_subscriber::util::TryInitError> for LoggingError
{
    fn from(err: tracing_subscriber::util::TryInitError) -> Self
    {
        LoggingError::InitializationFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_log_format_from_str()
    {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("dev").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("PROD").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_from_str()
    {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_to_tracing_level()
    {
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_invalid_filter_is_rejected()
    {
        let config = LogConfig {
            filter: "introspect_core=notalevel".to_string(),
            ..LogConfig::default()
        };
        assert!(matches!(init_logging_with_config(&config), Err(LoggingError::InvalidLevel(_))));
    }
}
