use std::io;
use verbolog::domain_model::{TimestampFlags, Verbosity};
use verbolog::logger::*;

fn main() {
    let log = Logger::default();
    log.debug("Debug message");
    log.info("Info message");
    log.warn("Warn message");
    log.error("Error message");

    // Only warnings and errors, on stderr, with a custom prefix
    let log = Logger::new([
        with_prefix("DEMO"),
        with_verbosity(Verbosity::Warn),
        with_std_driver(io::stderr(), TimestampFlags::STD | TimestampFlags::MICROSECONDS),
    ]);
    log.debug("hidden");
    log.info("hidden");
    log.warn("disk nearly full");
    log.error("disk full");
}
