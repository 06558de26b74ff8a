// src/internal/registry/global.rs
//
// Process-wide facade over a single stderr-bound Registry, for code that does not
// pass a registry around.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use super::Registry;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Builds the process-wide registry. Must run before any other function in this module;
/// calling it again returns the registry built the first time.
pub fn init() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Installs `registry` as the process-wide one. Returns it back if one already exists.
pub fn install(registry: Registry) -> Result<&'static Registry, Registry> {
    GLOBAL.set(registry)?;
    Ok(init())
}

pub fn try_global() -> Option<&'static Registry> {
    GLOBAL.get()
}

/// # Panics
///
/// Panics if [`init`] has not been called.
#[track_caller]
pub fn global() -> &'static Registry {
    match GLOBAL.get() {
        Some(registry) => registry,
        None => panic!("loggo::init must be called before logging"),
    }
}

macro_rules! level_fns {
    ($($(#[$doc:meta])* $print:ident, $printf:ident;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $print(values: &[&dyn Display]) {
                global().$print(values);
            }

            $(#[$doc])*
            #[track_caller]
            pub fn $printf(args: fmt::Arguments<'_>) {
                global().$printf(args);
            }
        )*
    };
}

level_fns! {
    /// Level 0: the system is unusable.
    emergency, emergencyf;
    /// Level 1: action must be taken immediately.
    alert, alertf;
    /// Level 2: software is in a critical condition.
    critical, criticalf;
    /// Level 3: software experienced an error.
    error, errorf;
    /// Level 4: software experienced a potential problem.
    warn, warnf;
    /// Level 5: software experienced a noteworthy event.
    notice, noticef;
    /// Level 6: running information.
    info, infof;
    /// Level 7: debugging information.
    debug, debugf;
    /// Level 7, for callers of the older print-style API.
    print, printf;
}

/// Logs a critical line with its call site, then exits the process.
#[track_caller]
pub fn fatal(values: &[&dyn Display]) -> ! {
    global().fatal(values)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    global().fatalf(args)
}
