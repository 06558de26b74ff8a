pub mod global;
mod macros;
pub mod registry;

pub use registry::{Registry, FATAL_EXIT_CODE, FATAL_FLAGS, STANDARD_FLAGS};
