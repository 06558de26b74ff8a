pub mod config;
pub mod logger;
pub mod registry;
pub mod severity;
pub mod writer;
