use anyhow::{Result, anyhow};
use std::io;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    reload,
    util::SubscriberInitExt,
};

/// Filter used until settings have been read.
pub const BOOTSTRAP_FILTER: &str = "info";

/// Process-wide `tracing` subscriber for the binary's own diagnostics, and for
/// lines routed through a [`TracingDriver`](crate::infra::TracingDriver).
///
/// Its filter is swapped for the one in the settings file once that is loaded.
pub struct Bootstrap {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Bootstrap {
    /// Installs the global subscriber on stdout. Fails if one is already installed.
    pub fn try_new(directives: &str) -> Result<Self> {
        Self::try_with_writer(directives, io::stdout)
    }

    /// Same as [`Bootstrap::try_new`], with events formatted into `writer`.
    pub fn try_with_writer<W>(directives: &str, writer: W) -> Result<Self>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let (filter, reload_handle) = reload::Layer::new(parse_filter(directives)?);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer))
            .try_init()?;

        Ok(Self { reload_handle })
    }

    /// Replaces the active filter, e.g. with `"info,verbolog=debug"`.
    pub fn reload(&self, directives: &str) -> Result<()> {
        self.reload_handle.reload(parse_filter(directives)?)?;
        Ok(())
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| anyhow!("invalid filter {directives:?}: {e}"))
}
