//! Verbosity-gated logging facade.
//!
//! Build a [`Logger`] once with [`Logger::new`] and a list of options, then
//! pass it to whatever needs to log. See `bin/logger_demo.rs` for a demo binary.

mod bootstrap;
mod logger;
mod options;

pub use bootstrap::*;
pub use logger::*;
pub use options::*;

pub use tracing::{debug, error, info, trace, warn};
