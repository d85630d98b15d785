//! Structured logging setup.
//!
//! Library code only emits `tracing` events. Applications and tests call
//! [`enable_logging`] once to route them to stderr (and optionally a file).
//!
//! Environment:
//! - `VARGRID_TRACE`: filter directive used when no level is passed (default `off`)
//! - `VARGRID_LOG_FORMAT`: `pretty` (default) or `json`
//! - `VARGRID_LOG_FILE`: also append events to this file

use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const TRACE_ENV: &str = "VARGRID_TRACE";
pub const FORMAT_ENV: &str = "VARGRID_LOG_FORMAT";
pub const FILE_ENV: &str = "VARGRID_LOG_FILE";

/// Failure to install the logging subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    InvalidFilter(String),
    InvalidFormat(String),
    LogFile { path: String, reason: String },
    Init(String),
}

impl LoggingError {
    pub fn code(&self) -> &'static str {
        match self {
            LoggingError::InvalidFilter(_) => "LOG_INVALID_FILTER",
            LoggingError::InvalidFormat(_) => "LOG_INVALID_FORMAT",
            LoggingError::LogFile { .. } => "LOG_FILE_UNAVAILABLE",
            LoggingError::Init(_) => "LOG_INIT_FAILED",
        }
    }
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::InvalidFilter(msg) => {
                write!(f, "[{}] Invalid log filter: {}", self.code(), msg)
            }
            LoggingError::InvalidFormat(value) => write!(
                f,
                "[{}] Invalid {} '{}' (expected 'json' or 'pretty')",
                self.code(),
                FORMAT_ENV,
                value
            ),
            LoggingError::LogFile { path, reason } => write!(
                f,
                "[{}] Failed to open log file {}: {}",
                self.code(),
                path,
                reason
            ),
            LoggingError::Init(msg) => {
                write!(f, "[{}] Failed to initialize logging: {}", self.code(), msg)
            }
        }
    }
}

impl std::error::Error for LoggingError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

fn parse_format(raw: &str) -> Result<LogFormat, LoggingError> {
    if raw.eq_ignore_ascii_case("json") {
        Ok(LogFormat::Json)
    } else if raw.eq_ignore_ascii_case("pretty") {
        Ok(LogFormat::Pretty)
    } else {
        Err(LoggingError::InvalidFormat(raw.to_string()))
    }
}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if level.eq_ignore_ascii_case("off") {
        Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()))
    } else {
        EnvFilter::try_new(level).map_err(|err| LoggingError::InvalidFilter(err.to_string()))
    }
}

fn open_log_file(path: &str) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| LoggingError::LogFile {
            path: path.to_string(),
            reason: err.to_string(),
        })
}

fn map_init_err<E: std::fmt::Display>(err: E) -> LoggingError {
    LoggingError::Init(err.to_string())
}

/// Install the global subscriber.
///
/// When `level` is `None`, the filter comes from `VARGRID_TRACE`, defaulting
/// to `off`. Returns `Ok(true)` when logging was initialized and `Ok(false)`
/// if a subscriber was already configured.
pub fn enable_logging(level: Option<&str>) -> Result<bool, LoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let level_value = level
        .map(str::to_string)
        .or_else(|| env::var(TRACE_ENV).ok())
        .unwrap_or_else(|| "off".to_string());
    let filter = build_filter(&level_value)?;

    let format = parse_format(&env::var(FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string()))?;
    let log_file = env::var(FILE_ENV).ok();

    match format {
        LogFormat::Json => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .json();
            let base = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer);
            if let Some(path) = log_file {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(open_log_file(&path)?)
                    .with_ansi(false)
                    .json();
                base.with(file_layer).try_init().map_err(map_init_err)?;
            } else {
                base.try_init().map_err(map_init_err)?;
            }
        }
        LogFormat::Pretty => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .pretty();
            let base = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer);
            if let Some(path) = log_file {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(open_log_file(&path)?)
                    .with_ansi(false)
                    .pretty();
                base.with(file_layer).try_init().map_err(map_init_err)?;
            } else {
                base.try_init().map_err(map_init_err)?;
            }
        }
    }

    tracing::debug!(
        component = "logging",
        operation = "enable",
        status = "success",
        level = %level_value,
        "Logging initialized"
    );
    Ok(true)
}
