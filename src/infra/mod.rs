mod memory_sink;
mod std_driver;
mod tracing_driver;

pub use memory_sink::*;
pub use std_driver::*;
pub use tracing_driver::*;
