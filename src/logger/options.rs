use super::LoggerConfig;
use crate::domain_model::{TimestampFlags, Verbosity};
use crate::domain_port::Driver;
use crate::infra::StdDriver;
use std::io::Write;

/// Customizes a [`LoggerConfig`] while a [`Logger`](super::Logger) is built.
pub type LoggerOption = Box<dyn FnOnce(LoggerConfig) -> LoggerConfig + Send>;

/// Replaces the driver with a [`StdDriver`] writing to `writer`.
///
/// The driver prefix is taken from the prefix configured so far, so apply
/// [`with_prefix`] before this option.
pub fn with_std_driver<W>(writer: W, flags: TimestampFlags) -> LoggerOption
where
    W: Write + Send + 'static,
{
    Box::new(move |mut config: LoggerConfig| {
        let prefix = format!("[{}] ", config.prefix);
        config.driver = Some(Box::new(StdDriver::new(writer, prefix, flags)));
        config
    })
}

pub fn with_driver<D: Driver + 'static>(driver: D) -> LoggerOption {
    Box::new(move |mut config: LoggerConfig| {
        config.driver = Some(Box::new(driver));
        config
    })
}

pub fn with_verbosity(verbosity: Verbosity) -> LoggerOption {
    Box::new(move |mut config: LoggerConfig| {
        config.verbosity = verbosity;
        config
    })
}

/// Sets the logger prefix. The current driver keeps the prefix it was built with.
pub fn with_prefix(prefix: impl Into<String>) -> LoggerOption {
    let prefix = prefix.into();
    Box::new(move |mut config: LoggerConfig| {
        config.prefix = prefix;
        config
    })
}
