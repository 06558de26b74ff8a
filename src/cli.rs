use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::internal::config::{get_version_info, LoggerConfig};
use crate::internal::severity::Severity;

/// What a single `loggo` invocation should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Write one line at the given severity.
    Log { severity: Severity, message: Vec<String> },
    /// Write one critical line with its call site, then exit non-zero.
    Fatal { message: Vec<String> },
    /// Print the severity table to stdout.
    List,
}

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str = Box::leak(get_version_info().into_boxed_str());

    Command::new("loggo")
        .version(version)
        .about("Write a syslog-tagged line to stderr")
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_parser(clap::value_parser!(Severity))
                .default_value("notice")
                .help("Severity name, alias (emerg, crit, err, warn, print) or priority 0-7"),
        )
        .arg(
            Arg::new("fatal")
                .long("fatal")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["level", "list"])
                .help("Log at critical with the call site, then exit non-zero"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("Print the severity table and exit"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to config file (default: ./loggo.{toml,yaml,json})"),
        )
        .arg(
            Arg::new("values")
                .num_args(0..)
                .trailing_var_arg(true)
                .help("Values to log, joined by single spaces"),
        )
}

pub fn parse_action(matches: &clap::ArgMatches) -> Action {
    if matches.get_flag("list") {
        return Action::List;
    }

    let message: Vec<String> = matches
        .get_many::<String>("values")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if matches.get_flag("fatal") {
        return Action::Fatal { message };
    }

    let severity = matches
        .get_one::<Severity>("level")
        .copied()
        .unwrap_or(Severity::Notice);

    Action::Log { severity, message }
}

pub fn parse_config(matches: &clap::ArgMatches) -> anyhow::Result<LoggerConfig> {
    let cfg = match matches.get_one::<PathBuf>("config") {
        Some(path) => LoggerConfig::load_from(path)?,
        None => LoggerConfig::load()?,
    };
    Ok(cfg)
}

/// The table printed by `--list`.
pub fn severity_table() -> String {
    let mut table = String::from("LEVEL      PRIORITY  TAG\n");
    for severity in Severity::ALL {
        table.push_str(&format!(
            "{:<10} {:<9} {}\n",
            severity.name(),
            severity.priority(),
            severity.tag()
        ));
    }
    table
}
