use crate::domain_model::Verbosity;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Delivers a fully formatted log line to the operating system or a third party.
///
/// A driver is shared by every thread that holds its logger, so a single call
/// must write the whole line without interleaving with concurrent calls.
pub trait Driver: Send + Sync {
    /// Prints `line` and terminates it with a newline.
    ///
    /// Panics if the underlying sink cannot be written to.
    fn println(&self, line: &str);

    /// Prints a line that was logged at `severity`. Drivers that route by
    /// level override this; the rest ignore the severity.
    fn println_at(&self, severity: Verbosity, line: &str) {
        let _ = severity;
        self.println(line)
    }
}

impl<D: Driver + ?Sized> Driver for Arc<D> {
    fn println(&self, line: &str) {
        (**self).println(line)
    }

    fn println_at(&self, severity: Verbosity, line: &str) {
        (**self).println_at(severity, line)
    }
}

impl<D: Driver + ?Sized> Driver for Box<D> {
    fn println(&self, line: &str) {
        (**self).println(line)
    }

    fn println_at(&self, severity: Verbosity, line: &str) {
        (**self).println_at(severity, line)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
