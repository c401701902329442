//! Settings file and command line for the `verbolog` binary.
//! See `main.rs` for how they turn into a `Logger`.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
