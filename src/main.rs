use verbolog::logger::*;
use verbolog::settings::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let bootstrap = Bootstrap::try_new(BOOTSTRAP_FILTER)?;

    let mut project_settings = parse_settings(cli.settings.as_deref())?;
    if let Some(verbosity) = cli.verbosity {
        project_settings.log.verbosity = verbosity;
    }
    info!(?project_settings);
    bootstrap.reload(&project_settings.log.filter)?;

    let log = Logger::from_settings(&project_settings.log)?;
    debug!(verbosity = %log.verbosity(), prefix = log.prefix(), "logger ready");

    log.debug("Debug message");
    log.info("Info message");
    log.warn("Warn message");
    log.error("Error message");

    Ok(())
}
