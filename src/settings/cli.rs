use super::Parser;
use crate::domain_model::Verbosity;

#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,
    /// Overrides `log.verbosity` from the settings file.
    #[arg(long, value_enum)]
    pub verbosity: Option<Verbosity>,
}
