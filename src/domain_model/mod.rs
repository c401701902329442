mod timestamp;
mod verbosity;

pub use timestamp::*;
pub use verbosity::*;
