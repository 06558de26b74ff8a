// src/internal/writer/writer.rs

use std::fmt::{self, Display, Write as _};
use std::panic::Location;

use chrono::{Local, NaiveDateTime, Utc};

use super::{Flags, Sink};

/// Renders one line per call: prefix, date/time/source header, message, newline.
#[derive(Debug, Clone)]
pub struct Writer {
    sink: Sink,
    prefix: String,
    flags: Flags,
}

impl Writer {
    pub fn new(sink: Sink, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            sink,
            prefix: prefix.into(),
            flags,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }

    /// Writes the values joined by single spaces.
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        let caller = Location::caller();
        self.output(caller.file(), caller.line(), &join(values));
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        match args.as_str() {
            Some(message) => self.output(caller.file(), caller.line(), message),
            None => self.output(caller.file(), caller.line(), &args.to_string()),
        }
    }

    /// Writes a single line attributed to `file:line`. Write errors are dropped.
    pub fn output(&self, file: &str, line: u32, message: &str) {
        let now = if self.flags.contains(Flags::UTC) {
            Utc::now().naive_utc()
        } else {
            Local::now().naive_local()
        };
        let rendered = self.render(now, file, line, message);
        let _ = self.sink.write_line(rendered.as_bytes());
    }

    /// Builds the full line for `message` as of `now`.
    pub fn render(&self, now: NaiveDateTime, file: &str, line: u32, message: &str) -> String {
        let mut buf = String::with_capacity(self.prefix.len() + message.len() + 32);
        if !self.flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
        if self.flags.contains(Flags::DATE) {
            let _ = write!(buf, "{} ", now.format("%Y/%m/%d"));
        }
        if self.flags.wants_time() {
            let _ = write!(buf, "{}", now.format("%H:%M:%S"));
            if self.flags.contains(Flags::MICROSECONDS) {
                let _ = write!(buf, "{}", now.format("%.6f"));
            }
            buf.push(' ');
        }
        if self.flags.wants_file() {
            let file = if self.flags.contains(Flags::SHORT_FILE) {
                short_file(file)
            } else {
                file
            };
            let _ = write!(buf, "{}:{}: ", file, line);
        }
        if self.flags.contains(Flags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
        buf.push_str(message);
        if !message.ends_with('\n') {
            buf.push('\n');
        }
        buf
    }
}

pub(crate) fn join(values: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        let _ = write!(message, "{}", value);
    }
    message
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
