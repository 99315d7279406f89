//! Command execution for the TinyDB binary

use crate::cli::Commands;
use crate::config::TinyDbConfig;
use crate::repl::{run_file, start_repl, Shell};
use anyhow::Result;

/// Execute a CLI command
pub fn execute_command(command: Commands, config: &TinyDbConfig) -> Result<()> {
    match command {
        Commands::Shell { no_banner, history_file } => {
            let mut config = config.clone();
            if history_file.is_some() {
                config.shell.history_file = history_file;
            }
            let show_banner = config.shell.banner && !no_banner;
            start_repl(&config, show_banner)
        }
        Commands::Run { file } => run_file(&file, config, &mut std::io::stdout()),
        Commands::Exec { sql } => execute_sql(&sql, config, &mut std::io::stdout()),
    }
}

/// Feed a command-line string through a fresh shell
pub fn execute_sql<W: std::io::Write>(sql: &str, config: &TinyDbConfig, out: &mut W) -> Result<()> {
    let mut shell = Shell::from_config(config);
    shell.feed_all(sql, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_sql_reports_each_statement() {
        let mut config = TinyDbConfig::default();
        config.shell.color = false;
        let mut out = Vec::new();

        execute_sql(
            "CREATE DATABASE a; USE a; CREATE TABLE t (x INT); INSERT INTO t VALUES (1); SELECT x FROM t;",
            &config,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Database 'a' created",
                "Database changed to 'a'",
                "Table 't' created",
                "1 row inserted into 't'",
                "Error: Unknown command: SELECT x FROM t",
            ]
        );
    }

    #[test]
    fn test_execute_sql_honors_engine_config() {
        let mut config = TinyDbConfig::default();
        config.shell.color = false;
        config.engine.allow_duplicate_columns = true;
        let mut out = Vec::new();

        execute_sql("CREATE DATABASE a; USE a; CREATE TABLE t (x INT, x INT);", &config, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Table 't' created\n"));
    }
}
