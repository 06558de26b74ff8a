pub mod severity;

pub use severity::{ParseSeverityError, Severity};
