//! Leveled logging to stderr with syslog priority tags (`<0>` .. `<7>`), the prefix
//! format `journald` understands when it captures a service's error stream.
//!
//! Construct a [`Registry`] and pass it around, or call [`init`] once and use the
//! process-wide functions.

pub mod cli;
pub mod internal;

pub use internal::config::LoggerConfig;
pub use internal::logger::{init_logger, SeverityLayer};
pub use internal::registry::global::{
    alert, alertf, critical, criticalf, debug, debugf, emergency, emergencyf, error, errorf,
    fatal, fatalf, global, info, infof, init, install, notice, noticef, print, printf,
    try_global, warn, warnf,
};
pub use internal::registry::Registry;
pub use internal::severity::{ParseSeverityError, Severity};
pub use internal::writer::{Flags, MemorySink, Sink, Writer};
