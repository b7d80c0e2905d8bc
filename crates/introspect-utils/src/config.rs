//! Logging configuration resolved from the environment.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use tracing::Level;

use crate::logging::{LogFormat, LogLevel};

/// Filter directive read from the environment.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Output format selector (`pretty` or `json`).
pub const FORMAT_ENV: &str = "INTROSPECT_LOG_FORMAT";
/// Optional log file path.
pub const FILE_ENV: &str = "INTROSPECT_LOG_FILE";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Settings consumed by [`crate::init_logging_with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig
{
    /// `EnvFilter` directive, e.g. `info` or `introspect_core=trace`
    pub filter: String,
    /// Console and file output format
    pub format: LogFormat,
    /// Daily-rolled log file; `None` logs to the console only
    pub file: Option<PathBuf>,
}

impl Default for LogConfig
{
    fn default() -> Self
    {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

impl LogConfig
{
    /// Read `RUST_LOG`, `INTROSPECT_LOG_FORMAT` and `INTROSPECT_LOG_FILE`.
    ///
    /// Unset or empty variables fall back to the defaults. An unrecognised
    /// format falls back to pretty output.
    #[must_use]
    pub fn from_env() -> Self
    {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            filter: non_empty(FILTER_ENV).unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            format: non_empty(FORMAT_ENV)
                .and_then(|value| LogFormat::from_str(&value).ok())
                .unwrap_or_default(),
            file: non_empty(FILE_ENV).map(PathBuf::from),
        }
    }

    /// Replace the filter with a single level.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self
    {
        self.filter = Level::from(level).to_string();
        self
    }

    /// Replace the output format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self
    {
        self.format = format;
        self
    }

    /// Directory holding the rolled log files; the working directory for a
    /// bare file name.
    pub fn log_directory(&self) -> Option<PathBuf>
    {
        self.file.as_deref().map(|path| match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        })
    }

    /// File written on `date`: the configured name with a `.YYYY-MM-DD`
    /// suffix, as produced by the daily roller.
    pub fn rolled_file(&self, date: NaiveDate) -> Option<PathBuf>
    {
        let directory = self.log_directory()?;
        let file_name = self.file.as_deref().and_then(Path::file_name)?;
        Some(directory.join(format!("{}.{}", file_name.to_string_lossy(), date.format("%Y-%m-%d"))))
    }

    /// File written today (UTC).
    pub fn current_file(&self) -> Option<PathBuf>
    {
        self.rolled_file(Utc::now().date_naive())
    }
}
