use super::LoggerOption;
use crate::domain_model::{TimestampFlags, Verbosity};
use crate::domain_port::Driver;
use crate::infra::StdDriver;
use std::fmt;
use std::panic::Location;
use std::path::Path;

pub const DEFAULT_PREFIX: &str = "LOG";

/// Everything a [`Logger`] needs, built once and never changed afterwards.
pub struct LoggerConfig {
    /// The most permissive level the logger is allowed to print.
    pub verbosity: Verbosity,
    /// The prefix of the logging message.
    /// Example:
    ///     2021/04/20 00:32:27 [PREFIX] [ main.rs:15 ] [INFO] Hello, this is a message.
    pub prefix: String,
    /// In charge of delivering the final line to the operating system or third party services.
    /// `None` until an option installs one; the logger then falls back to [`default_driver`].
    pub driver: Option<Box<dyn Driver>>,
}

impl LoggerConfig {
    /// * Verbosity: `Verbosity::Debug`
    /// * Driver: `StdDriver` on stdout with `TimestampFlags::STD`
    /// * Prefix: `LOG`
    pub fn new() -> Self {
        Self {
            verbosity: Verbosity::Debug,
            prefix: DEFAULT_PREFIX.to_string(),
            driver: None,
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `StdDriver` on stdout, line prefix `[LOG] `, date and time in UTC.
pub fn default_driver() -> Box<dyn Driver> {
    Box::new(StdDriver::stdout(
        format!("[{DEFAULT_PREFIX}] "),
        TimestampFlags::STD,
    ))
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("verbosity", &self.verbosity)
            .field("prefix", &self.prefix)
            .field("custom_driver", &self.driver.is_some())
            .finish()
    }
}

/// Prints messages at four levels of importance.
///
/// Implemented by [`Logger`]; depend on `&dyn Logging` where a consumer should
/// be testable with a recording double.
pub trait Logging: Send + Sync {
    /// Debug messages, usually read by developers.
    #[track_caller]
    fn debug(&self, message: &str);
    /// Important messages that are not necessarily an error.
    #[track_caller]
    fn info(&self, message: &str);
    /// Messages that should not compromise the execution of the program, but
    /// involve a certain risk for the system.
    #[track_caller]
    fn warn(&self, message: &str);
    /// Severe messages that should be addressed as soon as possible.
    #[track_caller]
    fn error(&self, message: &str);
}

/// Verbosity-gated facade that stamps every message with its call site.
///
/// Each line handed to the driver looks like `[ main.rs:15 ] [INFO] message`.
pub struct Logger {
    verbosity: Verbosity,
    prefix: String,
    driver: Box<dyn Driver>,
}

impl Logger {
    /// Applies `options` in order on top of [`LoggerConfig::new`]. Each
    /// option sees the config produced by the previous one.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        let config = options
            .into_iter()
            .fold(LoggerConfig::new(), |config, option| option(config));
        Self::from_config(config)
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            verbosity: config.verbosity,
            prefix: config.prefix,
            driver: config.driver.unwrap_or_else(default_driver),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn enabled(&self, severity: Verbosity) -> bool {
        self.verbosity.permits(severity)
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.log(Verbosity::Debug, message, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        self.log(Verbosity::Info, message, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, message: &str) {
        self.log(Verbosity::Warn, message, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        self.log(Verbosity::Error, message, Location::caller());
    }

    fn log(&self, severity: Verbosity, message: &str, caller: &Location<'_>) {
        if !self.enabled(severity) {
            return;
        }
        self.driver
            .println_at(severity, &format_line(caller, severity, message));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_config(LoggerConfig::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("verbosity", &self.verbosity)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Logging for Logger {
    #[track_caller]
    fn debug(&self, message: &str) {
        Logger::debug(self, message)
    }

    #[track_caller]
    fn info(&self, message: &str) {
        Logger::info(self, message)
    }

    #[track_caller]
    fn warn(&self, message: &str) {
        Logger::warn(self, message)
    }

    #[track_caller]
    fn error(&self, message: &str) {
        Logger::error(self, message)
    }
}

/// `[ <file>:<line> ] [<TAG>] <message>`, with the file reduced to its base name.
pub fn format_line(caller: &Location<'_>, severity: Verbosity, message: &str) -> String {
    format!(
        "[ {}:{} ] [{}] {}",
        base_name(caller.file()),
        caller.line(),
        severity.tag(),
        message
    )
}

fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MemorySink;
    use crate::logger::{with_std_driver, with_verbosity};

    fn capture(verbosity: Verbosity) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::new([
            with_verbosity(verbosity),
            with_std_driver(sink.clone(), TimestampFlags::empty()),
        ]);
        (logger, sink)
    }

    #[test]
    fn default_config() {
        let logger = Logger::default();
        assert_eq!(logger.verbosity(), Verbosity::Debug);
        assert_eq!(logger.prefix(), "LOG");
    }

    #[test]
    fn default_driver_is_only_built_when_no_option_installs_one() {
        assert!(LoggerConfig::new().driver.is_none());

        let option = with_std_driver(MemorySink::new(), TimestampFlags::empty());
        let config = option(LoggerConfig::new());
        assert!(config.driver.is_some());
    }

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("src/logger/logger.rs"), "logger.rs");
        assert_eq!(base_name("main.rs"), "main.rs");
    }

    #[test]
    fn call_site_is_the_caller_of_the_public_method() {
        let (logger, sink) = capture(Verbosity::Debug);
        let line = line!() + 1;
        logger.warn("disk nearly full");
        assert_eq!(
            sink.lines(),
            [format!("[LOG] [ logger.rs:{line} ] [WARNING] disk nearly full")]
        );
    }

    #[test]
    fn call_site_survives_trait_dispatch() {
        let (logger, sink) = capture(Verbosity::Debug);
        let logging: &dyn Logging = &logger;
        logging.info("via trait");
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[LOG] [ logger.rs:"));
        assert!(lines[0].ends_with("] [INFO] via trait"));
    }

    #[test]
    fn below_threshold_writes_nothing() {
        let (logger, sink) = capture(Verbosity::Error);
        logger.debug("x");
        logger.info("y");
        logger.warn("z");
        assert!(sink.is_empty());

        logger.error("disk full");
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR] disk full"));
    }

    #[test]
    fn format_is_stable_for_a_call_site() {
        let (logger, sink) = capture(Verbosity::Debug);
        for _ in 0..3 {
            logger.info("same");
        }
        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| *line == lines[0]));
    }
}
