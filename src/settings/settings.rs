use crate::domain_model::{ParseTimestampFlagError, TimestampFlags, Verbosity};
use crate::domain_port::SinkError;
use crate::infra::{StdDriver, TracingDriver};
use crate::logger::{
    DEFAULT_PREFIX, Logger, LoggerOption, with_driver, with_prefix, with_std_driver,
    with_verbosity,
};
use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Log {
    pub verbosity: Verbosity,
    pub prefix: String,
    pub sink: String, // "stdout", "stderr", "tracing" or a file path
    pub timestamp: Vec<String>,
    /// `EnvFilter` directives for the process-wide tracing subscriber.
    pub filter: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Debug,
            prefix: DEFAULT_PREFIX.to_string(),
            sink: "stdout".to_string(),
            timestamp: vec!["date".to_string(), "time".to_string(), "utc".to_string()],
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Stderr,
    Tracing,
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error(transparent)]
    Timestamp(#[from] ParseTimestampFlagError),
}

impl Log {
    pub fn sink(&self) -> Sink {
        match self.sink.as_str() {
            "stdout" => Sink::Stdout,
            "stderr" => Sink::Stderr,
            "tracing" => Sink::Tracing,
            path => Sink::File(PathBuf::from(path)),
        }
    }

    pub fn timestamp_flags(&self) -> Result<TimestampFlags, ParseTimestampFlagError> {
        TimestampFlags::from_names(&self.timestamp)
    }

    /// The options that reproduce this section, prefix first so the driver sees it.
    pub fn options(&self) -> Result<Vec<LoggerOption>, SettingsError> {
        let flags = self.timestamp_flags()?;
        let driver_prefix = format!("[{}] ", self.prefix);
        let driver = match self.sink() {
            Sink::Stdout => with_std_driver(io::stdout(), flags),
            Sink::Stderr => with_std_driver(io::stderr(), flags),
            Sink::Tracing => with_driver(TracingDriver::new(driver_prefix)),
            Sink::File(path) => with_driver(StdDriver::file(path, driver_prefix, flags)?),
        };
        Ok(vec![
            with_prefix(self.prefix.clone()),
            with_verbosity(self.verbosity),
            driver,
        ])
    }
}

impl Logger {
    pub fn from_settings(log: &Log) -> Result<Self, SettingsError> {
        Ok(Logger::new(log.options()?))
    }
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

/// Loads settings from `path`, or from the build's default file when `path` is
/// `None`. An explicit path must exist; a missing default file yields defaults.
pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let source = match path {
        Some(path) => File::with_name(path),
        None => File::with_name(SETTINGS_PATH).required(false),
    };

    let settings: Settings = Config::builder()
        .add_source(source)
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
