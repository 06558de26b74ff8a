// src/internal/logger/layer.rs

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::internal::registry::Registry;
use crate::internal::severity::Severity;

/// Forwards `tracing` events to a [`Registry`], one line per event.
///
/// ERROR, WARN and INFO map to error, warning and info; DEBUG and TRACE both land on
/// debug. The event's own source location is used when a writer prints file/line.
#[derive(Debug, Clone)]
pub struct SeverityLayer {
    registry: Registry,
    with_target: bool,
}

impl SeverityLayer {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            with_target: false,
        }
    }

    /// Prefix each message with the event target (`my_crate::module: ...`).
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }
}

impl<S> Layer<S> for SeverityLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Severity::from(*metadata.level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let mut message = String::new();
        if self.with_target {
            let _ = write!(message, "{}: ", metadata.target());
        }
        message.push_str(&visitor.finish());

        self.registry.writer(severity).output(
            metadata.file().unwrap_or("???"),
            metadata.line().unwrap_or(0),
            &message,
        );
    }
}

/// Collects `message` first, then the remaining fields as `name=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        if !self.message.is_empty() {
            parts.push(self.message);
        }
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
