// src/internal/logger/mod.rs

pub mod layer;
pub mod logger;

pub use layer::SeverityLayer;
pub use logger::init_logger;
