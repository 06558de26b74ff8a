// Format-string entry points on an explicit registry:
// `noticef!(registry, "listening on {}", addr)`.

#[macro_export]
macro_rules! emergencyf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.emergencyf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! alertf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.alertf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! criticalf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.criticalf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! errorf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.errorf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warnf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.warnf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! noticef {
    ($registry:expr, $($arg:tt)*) => {
        $registry.noticef(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! infof {
    ($registry:expr, $($arg:tt)*) => {
        $registry.infof(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debugf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.debugf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! printf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.printf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($registry:expr, $($arg:tt)*) => {
        $registry.fatalf(format_args!($($arg)*))
    };
}
