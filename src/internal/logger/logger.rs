// src/internal/logger/logger.rs

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::SeverityLayer;
use crate::internal::config::LoggerConfig;
use crate::internal::registry::Registry;

/// Installs a global tracing subscriber that writes every enabled event through
/// `registry`. `RUST_LOG` takes precedence over `cfg.tracing_filter`.
pub fn init_logger(cfg: &LoggerConfig, registry: Registry) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.tracing_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(SeverityLayer::new(registry).with_target(true))
        .try_init()?;

    Ok(())
}
