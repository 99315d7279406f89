use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

/// TinyDB - a minimal in-memory relational store
#[derive(Parser)]
#[command(name = "tinydb")]
#[command(version)]
#[command(about = "TinyDB - in-memory relational store with a line-oriented SQL shell")]
#[command(long_about = "
TinyDB keeps databases and tables in memory and understands four statements:

  CREATE DATABASE <name>;
  USE <name>;
  CREATE TABLE <name> (<column> INT|TEXT, ...);
  INSERT INTO <table> VALUES (<value>, ...);

Usage examples:
  tinydb                      # Start the interactive shell
  tinydb run setup.sql        # Run a script
  tinydb exec 'CREATE DATABASE shop;'
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (defaults to $TINYDB_CONFIG when set)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available commands for the TinyDB CLI
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start the interactive shell (default)
    #[command(alias = "repl")]
    Shell {
        /// Do not print the startup banner
        #[arg(long)]
        no_banner: bool,

        /// History file path
        #[arg(long, value_name = "FILE")]
        history_file: Option<PathBuf>,
    },

    /// Run the statements of a script file
    Run {
        /// Path to the script
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Run statements given on the command line
    Exec {
        /// Statements, each terminated by ';'
        #[arg(value_name = "SQL")]
        sql: String,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Shell {
            no_banner: false,
            history_file: None,
        }
    }
}

pub fn print_banner() {
    println!("{}", "Welcome to TinyDB (type 'exit;')".bright_cyan().bold());
}
