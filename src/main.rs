use anyhow::Result;
use clap::Parser;
use colored::*;
use std::process;
use tinydb::cli::Cli;
use tinydb::commands::execute_command;
use tinydb::config::TinyDbConfig;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = TinyDbConfig::discover(cli.config.as_deref())?;
    if cli.no_color {
        config.shell.color = false;
    }
    config.engine.apply_environment_overrides();

    init_logging(&cli, &config);

    execute_command(cli.command.unwrap_or_default(), &config)
}

/// `--debug` and `--verbose` win over the config file. `RUST_LOG`, when set, wins over all of them.
fn init_logging(cli: &Cli, config: &TinyDbConfig) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        config.shell.log_level.as_str()
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
