// src/internal/registry/registry.rs

use std::fmt::{self, Display};
use std::num::NonZeroU8;

use crate::internal::config::LoggerConfig;
use crate::internal::severity::Severity;
use crate::internal::writer::{Flags, Sink, Writer};

/// Flags of the eight leveled writers.
pub const STANDARD_FLAGS: Flags = Flags::STD;
/// Flags of the fatal writer; a fatal line also names its call site.
pub const FATAL_FLAGS: Flags = Flags::STD.union(Flags::SHORT_FILE);
pub const FATAL_EXIT_CODE: NonZeroU8 = NonZeroU8::MIN;

/// One writer per severity, all sharing a single sink.
///
/// Build it once and hand it (or a reference) to whatever needs to log; there is no
/// hidden initialization step. Every call is one synchronous line write and never fails
/// from the caller's point of view.
#[derive(Debug, Clone)]
pub struct Registry {
    writers: [Writer; 8],
    fatal: Writer,
    exit_code: NonZeroU8,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Writers bound to the process error stream.
    pub fn new() -> Self {
        Self::with_sink(Sink::stderr())
    }

    pub fn with_sink(sink: Sink) -> Self {
        Self::build(sink, STANDARD_FLAGS, FATAL_FLAGS, FATAL_EXIT_CODE)
    }

    /// An `exit_code` outside `1..=255` falls back to [`FATAL_EXIT_CODE`]; the OS keeps
    /// only the low byte, so anything else could report success.
    pub fn from_config(cfg: &LoggerConfig, sink: Sink) -> Self {
        let exit_code = u8::try_from(cfg.exit_code)
            .ok()
            .and_then(NonZeroU8::new)
            .unwrap_or(FATAL_EXIT_CODE);
        Self::build(sink, cfg.flags, cfg.fatal_flags, exit_code)
    }

    fn build(sink: Sink, flags: Flags, fatal_flags: Flags, exit_code: NonZeroU8) -> Self {
        let writers =
            Severity::ALL.map(|severity| Writer::new(sink.clone(), severity.tag(), flags));
        Self {
            writers,
            fatal: Writer::new(sink, Severity::Critical.tag(), fatal_flags),
            exit_code,
        }
    }

    pub fn writer(&self, severity: Severity) -> &Writer {
        &self.writers[severity.priority() as usize]
    }

    pub fn fatal_writer(&self) -> &Writer {
        &self.fatal
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(self.exit_code.get())
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, values: &[&dyn Display]) {
        self.writer(severity).print(values);
    }

    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.writer(severity).printf(args);
    }

    /// System is unusable.
    #[track_caller]
    pub fn emergency(&self, values: &[&dyn Display]) {
        self.log(Severity::Emergency, values);
    }

    #[track_caller]
    pub fn emergencyf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Emergency, args);
    }

    /// Action must be taken immediately.
    #[track_caller]
    pub fn alert(&self, values: &[&dyn Display]) {
        self.log(Severity::Alert, values);
    }

    #[track_caller]
    pub fn alertf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Alert, args);
    }

    /// Software is in a critical condition.
    #[track_caller]
    pub fn critical(&self, values: &[&dyn Display]) {
        self.log(Severity::Critical, values);
    }

    #[track_caller]
    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Critical, args);
    }

    /// Software experienced an error.
    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.log(Severity::Error, values);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Error, args);
    }

    /// Software experienced a potential problem.
    #[track_caller]
    pub fn warn(&self, values: &[&dyn Display]) {
        self.log(Severity::Warning, values);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Warning, args);
    }

    /// Software experienced a noteworthy event.
    #[track_caller]
    pub fn notice(&self, values: &[&dyn Display]) {
        self.log(Severity::Notice, values);
    }

    #[track_caller]
    pub fn noticef(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Notice, args);
    }

    /// Running information.
    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.log(Severity::Info, values);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Info, args);
    }

    /// Debugging information.
    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.log(Severity::Debug, values);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Debug, args);
    }

    /// Same as [`Registry::debug`]; kept for callers of the older print-style API.
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.debug(values);
    }

    /// Same as [`Registry::debugf`].
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.debugf(args);
    }

    /// Writes a critical line naming the call site, flushes, and exits the process.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.fatal.print(values);
        self.terminate()
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal.printf(args);
        self.terminate()
    }

    fn terminate(&self) -> ! {
        let _ = self.fatal.sink().flush();
        std::process::exit(self.exit_code())
    }
}
