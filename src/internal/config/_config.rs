use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::internal::writer::Flags;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line plus the build metadata emitted by the build script.
pub fn get_version_info() -> String {
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");

    format!(
        "loggo version {}\n\
         Built: {} ({})\n\
         Rust: {}\n\
         Target: {}",
        VERSION, build_date, build_timestamp, rustc_semver, cargo_target_triple
    )
}

/// Writer settings for a [`Registry`](crate::Registry).
///
/// The defaults reproduce the fixed registry layout: date and time on every leveled
/// writer, plus the short source location on the fatal writer, and exit status 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_flags")]
    pub flags: Flags,
    #[serde(default = "default_fatal_flags")]
    pub fatal_flags: Flags,
    #[serde(default = "default_exit_code")]
    pub exit_code: i32,
    /// Filter for the tracing subscriber installed by the binary; `RUST_LOG` wins.
    #[serde(default = "default_tracing_filter")]
    pub tracing_filter: String,
}

fn default_flags() -> Flags {
    Flags::STD
}
fn default_fatal_flags() -> Flags {
    Flags::STD | Flags::SHORT_FILE
}
fn default_exit_code() -> i32 {
    1
}
fn default_tracing_filter() -> String {
    "warn".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            flags: default_flags(),
            fatal_flags: default_fatal_flags(),
            exit_code: default_exit_code(),
            tracing_filter: default_tracing_filter(),
        }
    }
}

impl LoggerConfig {
    /// Loads `loggo.*` from the working directory (if present) and `LOGGO_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name("loggo").required(false))
    }

    /// Loads an explicit config file, then `LOGGO_*` variables on top of it.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(File::from(path.as_ref()).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .set_default("flags", vec!["date", "time"])?
            .set_default("fatal_flags", vec!["date", "time", "shortfile"])?
            .set_default("exit_code", 1)?
            .set_default("tracing_filter", "warn")?
            .add_source(file)
            .add_source(
                Environment::with_prefix("LOGGO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("flags")
                    .with_list_parse_key("fatal_flags"),
            )
            .build()?;

        let cfg: LoggerConfig = config.try_deserialize()?;

        if !(1..=255).contains(&cfg.exit_code) {
            return Err(ConfigError::Message(format!(
                "exit_code must be in 1..=255, got {}",
                cfg.exit_code
            )));
        }

        Ok(cfg)
    }
}
