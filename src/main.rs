use std::fmt::Display;

use loggo::cli::{build_cli, parse_action, parse_config, severity_table, Action};
use loggo::{init_logger, Registry, Sink};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let registry = Registry::from_config(&config, Sink::stderr());

    if let Err(e) = init_logger(&config, registry.clone()) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    let action = parse_action(&matches);
    debug!(?action, flags = %config.flags, "resolved invocation");

    match action {
        Action::List => print!("{}", severity_table()),
        Action::Log { severity, message } => {
            let values: Vec<&dyn Display> = message.iter().map(|v| v as &dyn Display).collect();
            registry.log(severity, &values);
        }
        Action::Fatal { message } => {
            let values: Vec<&dyn Display> = message.iter().map(|v| v as &dyn Display).collect();
            registry.fatal(&values);
        }
    }

    Ok(())
}
