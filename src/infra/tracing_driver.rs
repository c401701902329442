use crate::domain_model::Verbosity;
use crate::domain_port::Driver;

/// Forwards lines to the `tracing` subscriber installed by the host process.
///
/// Events go to the `verbolog` target at the level the line was logged at, so
/// a subscriber filter such as `warn` still lets `[ERROR]` lines through.
/// Lines without a severity are emitted at `INFO`.
#[derive(Debug, Clone, Default)]
pub struct TracingDriver {
    prefix: String,
}

impl TracingDriver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Driver for TracingDriver {
    fn println(&self, line: &str) {
        self.println_at(Verbosity::Info, line);
    }

    fn println_at(&self, severity: Verbosity, line: &str) {
        let prefix = &self.prefix;
        match severity {
            Verbosity::Error => tracing::error!(target: "verbolog", "{prefix}{line}"),
            Verbosity::Warn => tracing::warn!(target: "verbolog", "{prefix}{line}"),
            Verbosity::Info => tracing::info!(target: "verbolog", "{prefix}{line}"),
            Verbosity::Debug => tracing::debug!(target: "verbolog", "{prefix}{line}"),
        }
    }
}
